mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    edit, init, presets, render, variants, EditArgs, InitArgs, PresetsArgs, RenderArgs, VariantsArgs,
};

/// Vitae CLI - render and edit resumes from JSON
#[derive(Parser, Debug)]
#[command(name = "vitae")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create vitae.config.json and an example resume
    Init(InitArgs),

    /// Render a resume document to HTML or a JSON render tree
    Render(RenderArgs),

    /// Apply mutations to a resume document
    Edit(EditArgs),

    /// List section variants
    Variants(VariantsArgs),

    /// List template presets
    Presets(PresetsArgs),
}

fn main() {
    // VITAE_LOG wins over RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("VITAE_LOG")
                .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Render(args) => render(args, &cwd),
                Command::Edit(args) => edit(args, &cwd),
                Command::Variants(args) => variants(args),
                Command::Presets(args) => presets(args),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
