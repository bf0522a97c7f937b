use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use vitae_evaluator::{RenderMode, VariantOverrides};
use vitae_model::{presets, DateFormat, FontScale, SectionType, StyleSettings, TemplateConfig};

pub const DEFAULT_CONFIG_NAME: &str = "vitae.config.json";

/// Template id that selects `TemplateConfig::default()` instead of a preset
pub const BASE_TEMPLATE: &str = "default";

/// Vitae project configuration file format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Preset id, or "default" for the base template
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub mode: RenderMode,

    /// compact, normal, large or a numeric factor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    /// Section type → variant id, winning over the template
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variant_overrides: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    /// Partial template JSON deep-merged onto the selected template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_overrides: Option<serde_json::Value>,
}

fn default_template() -> String {
    BASE_TEMPLATE.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Invalid {}: {}", DEFAULT_CONFIG_NAME, e))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Selected template with overrides and theme colours applied
    pub fn template_config(&self) -> Result<TemplateConfig> {
        let mut config = if self.template == BASE_TEMPLATE {
            TemplateConfig::default()
        } else {
            presets::get(&self.template)?
        };

        if let Some(overrides) = &self.template_overrides {
            config = config.with_overrides(overrides)?;
        }
        if self.theme_color.is_some() || self.secondary_color.is_some() {
            config = config.with_theme_colors(self.theme_color.as_deref(), self.secondary_color.as_deref());
        }
        Ok(config)
    }

    pub fn style_settings(&self) -> Result<StyleSettings> {
        let mut settings = StyleSettings::default();
        if let Some(raw) = &self.font_scale {
            let scale = FontScale::parse(raw).ok_or_else(|| anyhow!("Unknown font scale: {}", raw))?;
            settings.set_font_scale(scale);
        }
        if let Some(raw) = &self.date_format {
            let format = DateFormat::parse(raw).ok_or_else(|| anyhow!("Unknown date format: {}", raw))?;
            settings.set_date_format(format);
        }
        Ok(settings)
    }

    pub fn variant_overrides(&self) -> Result<VariantOverrides> {
        self.variant_overrides
            .iter()
            .map(|(section, variant)| {
                let kind = SectionType::parse(section).ok_or_else(|| anyhow!("Unknown section type: {}", section))?;
                Ok((kind, variant.clone()))
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            mode: RenderMode::Display,
            font_scale: None,
            date_format: None,
            variant_overrides: BTreeMap::new(),
            theme_color: None,
            secondary_color: None,
            template_overrides: None,
        }
    }
}
