use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use vitae_compiler_html::{compile_to_html, CompileOptions as HtmlOptions};
use vitae_evaluator::{AllowAll, RenderDocument, RenderMode, Renderer};
use vitae_model::Document;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Resume document (JSON)
    pub document: PathBuf,

    /// Output format (html, json)
    #[arg(short, long, default_value = "html")]
    pub format: String,

    /// Template preset (overrides config)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Render with edit hooks and placeholders
    #[arg(long)]
    pub editable: bool,

    /// Variant override, repeatable (e.g. --variant skills=pills)
    #[arg(long = "variant", value_name = "SECTION=VARIANT")]
    pub variants: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(template) = &args.template {
        config.template = template.clone();
    }
    if args.editable {
        config.mode = RenderMode::Editable;
    }
    for flag in &args.variants {
        let (section, variant) = parse_variant_flag(flag)?;
        config.variant_overrides.insert(section, variant);
    }

    let document = load_document(&args.document, cwd)?;
    let output = render_document(&document, &config)?;

    let content = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&output)?,
        "html" => {
            let options = HtmlOptions {
                title: document
                    .personal_info()
                    .text_field("fullName")
                    .unwrap_or("Resume")
                    .to_string(),
                ..Default::default()
            };
            compile_to_html(&output, options)?
        }
        other => return Err(anyhow!("Unknown format: {} (expected html or json)", other)),
    };

    write_output(args.out.as_deref(), cwd, &content)
}

/// Render with everything the project config selects
pub(crate) fn render_document(document: &Document, config: &Config) -> Result<RenderDocument> {
    let template = config.template_config()?;
    let options = config.style_settings()?.snapshot();
    let overrides = config.variant_overrides()?;

    Ok(Renderer::new().render(document, &template, &options, config.mode, &AllowAll, &overrides))
}

pub(crate) fn load_document(path: &Path, cwd: &str) -> Result<Document> {
    let path = PathBuf::from(cwd).join(path);
    let source = fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?;
    Document::from_json_str(&source).with_context(|| format!("Invalid resume document {}", path.display()))
}

/// Write to `out`, or stdout when it is `None`
pub(crate) fn write_output(out: Option<&Path>, cwd: &str, content: &str) -> Result<()> {
    match out {
        Some(out) => {
            let path = PathBuf::from(cwd).join(out);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn parse_variant_flag(flag: &str) -> Result<(String, String)> {
    match flag.split_once('=') {
        Some((section, variant)) if !section.is_empty() && !variant.is_empty() => {
            Ok((section.trim().to_string(), variant.trim().to_string()))
        }
        _ => Err(anyhow!("Expected SECTION=VARIANT, got '{}'", flag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_variant_flag() {
        assert_eq!(
            parse_variant_flag("skills=pills").unwrap(),
            ("skills".to_string(), "pills".to_string())
        );
        assert!(parse_variant_flag("skills").is_err());
        assert!(parse_variant_flag("=pills").is_err());
    }

    #[test]
    fn test_render_document_applies_config() {
        let document = Document::from_json(json!({
            "personalInfo": {"fullName": "Ada Lovelace"},
            "skills": [{"id": "s1", "name": "Rust", "level": 4}]
        }))
        .unwrap();

        let mut config = Config::default();
        config.variant_overrides.insert("skills".to_string(), "pills".to_string());

        let output = render_document(&document, &config).unwrap();
        let json = serde_json::to_value(&output).unwrap().to_string();
        assert!(json.contains("\"data-variant\":\"pills\""));
    }
}
