use anyhow::Result;
use clap::Args;
use colored::Colorize;
use vitae_model::presets;

#[derive(Debug, Args)]
pub struct PresetsArgs {
    /// Print each preset's full configuration as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn presets(args: PresetsArgs) -> Result<()> {
    for id in presets::ids() {
        let config = presets::get(id)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            continue;
        }

        println!("{} {}", id.bright_white().bold(), format!("({})", config.name).dimmed());
        if !config.description.is_empty() {
            println!("    {}", config.description);
        }
        println!(
            "    layout: {}  header: {}",
            serde_json::to_value(config.layout.kind)?.as_str().unwrap_or_default(),
            config.header.variant
        );
    }
    Ok(())
}
