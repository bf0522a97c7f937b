use crate::config::{Config, BASE_TEMPLATE, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use vitae_model::presets;

const EXAMPLE_RESUME: &str = "resume.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Template preset id, or "default"
    #[arg(short, long, default_value = BASE_TEMPLATE)]
    pub template: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), DEFAULT_CONFIG_NAME.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    if args.template != BASE_TEMPLATE && !presets::ids().any(|id| id == args.template) {
        return Err(anyhow!(
            "Unknown template: {} (available: {}, {})",
            args.template,
            BASE_TEMPLATE,
            presets::ids().collect::<Vec<_>>().join(", ")
        ));
    }

    println!("{}", "📝 Initializing Vitae project...".bright_blue().bold());

    let example_file = PathBuf::from(cwd).join(EXAMPLE_RESUME);
    if !example_file.exists() {
        fs::write(&example_file, example_resume())?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_RESUME);
    }

    let config = Config {
        template: args.template.clone(),
        ..Default::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Fill in {}", EXAMPLE_RESUME);
    println!("  2. Run: vitae render {} --out resume.html", EXAMPLE_RESUME);
    println!("  3. Try other layouts with: vitae presets");

    Ok(())
}

fn example_resume() -> String {
    let resume = serde_json::json!({
        "personalInfo": {
            "fullName": "Your Name",
            "title": "Software Engineer",
            "email": "you@example.com",
            "location": "City, Country",
            "summary": "A short paragraph about what you do best."
        },
        "experience": [{
            "id": "exp-1",
            "position": "Engineer",
            "company": "Company",
            "startDate": "2021-01",
            "current": true,
            "description": "What you owned and what changed because of it.",
            "bulletPoints": ["Something you shipped"]
        }],
        "education": [{
            "id": "edu-1",
            "school": "University",
            "degree": "BSc",
            "field": "Computer Science",
            "startDate": "2017-09",
            "endDate": "2020-06"
        }],
        "skills": [{"id": "skill-1", "name": "Rust", "level": 4}]
    });
    format!("{:#}\n", resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_model::Document;

    #[test]
    fn test_example_resume_is_valid() {
        let document = Document::from_json_str(&example_resume()).unwrap();
        assert_eq!(document.list("experience").len(), 1);
        assert_eq!(document.personal_info().text_field("fullName"), Some("Your Name"));
    }
}
