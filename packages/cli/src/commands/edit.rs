use crate::commands::render::{load_document, write_output};
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use vitae_editor::{EditSession, Mutation, Pipeline};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Resume document (JSON)
    pub document: PathBuf,

    /// Mutation file: one mutation object or an array of them
    pub mutations: PathBuf,

    /// Write the edited document here (defaults to stdout)
    #[arg(short, long, conflicts_with = "in_place")]
    pub out: Option<PathBuf>,

    /// Overwrite the input document
    #[arg(short, long)]
    pub in_place: bool,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = load_document(&args.document, cwd)?;
    let mutations = load_mutations(&PathBuf::from(cwd).join(&args.mutations))?;

    let mut pipeline = Pipeline::new(config.template_config()?, config.mode);
    pipeline.set_overrides(config.variant_overrides()?);

    let mut session = EditSession::with_settings("cli", document, config.style_settings()?);
    pipeline.full_render(&session);

    eprintln!("{}", format!("✏️  Applying {} mutation(s)...", mutations.len()).bright_blue().bold());

    for (index, mutation) in mutations.into_iter().enumerate() {
        let kind = mutation.kind();
        match pipeline.apply_mutation(&mut session, mutation) {
            Ok(result) => {
                let rerendered = if result.rerendered.is_empty() {
                    "nothing".to_string()
                } else {
                    result.rerendered.join(", ")
                };
                eprintln!(
                    "  {} {} {} {} {}",
                    "✓".green(),
                    kind,
                    result.address.to_string().bright_white(),
                    "→".dimmed(),
                    rerendered.dimmed()
                );
            }
            Err(err) => {
                eprintln!("  {} {} #{}: {}", "✗".red(), kind, index, err);
                return Err(anyhow!("Mutation #{} failed, document left unchanged", index));
            }
        }
    }

    session.confirm_all()?;
    let content = session.document().to_json_string_pretty()?;

    let out = if args.in_place { Some(args.document.as_path()) } else { args.out.as_deref() };
    write_output(out, cwd, &content)
}

fn load_mutations(path: &Path) -> Result<Vec<Mutation>> {
    let source = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&source).with_context(|| format!("Invalid JSON in {}", path.display()))?;
    parse_mutations(value).with_context(|| format!("Invalid mutations in {}", path.display()))
}

fn parse_mutations(value: serde_json::Value) -> Result<Vec<Mutation>> {
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_and_list() {
        let single = parse_mutations(json!({
            "type": "setField",
            "address": "personalInfo.fullName",
            "value": "Ada"
        }))
        .unwrap();
        assert_eq!(single.len(), 1);

        let list = parse_mutations(json!([
            {"type": "removeValue", "list": "skills.0.keywords", "index": 0},
            {"type": "moveItem", "list": "skills", "id": "s1", "toIndex": 0}
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].kind(), "moveItem");
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(parse_mutations(json!({"type": "rename", "address": "x"})).is_err());
    }
}
