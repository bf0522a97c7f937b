use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use vitae_evaluator::VariantRegistry;
use vitae_model::SectionType;

#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Only list variants for this section type
    pub section: Option<String>,
}

pub fn variants(args: VariantsArgs) -> Result<()> {
    let registry = VariantRegistry::new();

    let kinds: Vec<SectionType> = match &args.section {
        Some(raw) => vec![SectionType::parse(raw).ok_or_else(|| anyhow!("Unknown section type: {}", raw))?],
        None => registry.section_types().collect(),
    };

    for kind in kinds {
        let default = registry.default_variant(kind).map(|v| v.id).unwrap_or_default();
        println!("{}", kind.as_str().bright_blue().bold());

        for variant in registry.variants(kind) {
            let marker = if variant.id == default { "*".green() } else { " ".normal() };
            println!("  {} {:<18} {}", marker, variant.id.bright_white(), variant.description);
            if let Some(rule) = variant.reorders {
                println!("      {} {}", "reorders:".yellow(), rule);
            }
        }
        println!();
    }

    println!("{} default variant", "*".green());
    Ok(())
}
