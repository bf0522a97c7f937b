//! # Style Cascade
//!
//! Resolves the concrete text style for a semantic role.
//!
//! Resolution is per property, not per object:
//!
//! ```text
//! section override  →  template role default  →  baseline default
//! ```
//!
//! A section that only overrides `color` still gets `fontSize` from the
//! template. Font scaling is applied last and always starts from the
//! resolved (unscaled) template value, so rendering twice never compounds
//! the factor.

use std::collections::BTreeMap;
use vitae_model::{HeaderCase, StyleOptions, TemplateConfig, TextRole, TextStyle, TextTransform, Typography};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: f32,
    pub letter_spacing: Option<String>,
    pub text_transform: Option<TextTransform>,
    pub color: String,
}

impl ResolvedStyle {
    /// CSS property map, ordered by property name
    pub fn to_styles(&self) -> BTreeMap<String, String> {
        let mut styles = BTreeMap::new();
        styles.insert("font-size".to_string(), self.font_size.clone());
        styles.insert("font-weight".to_string(), self.font_weight.to_string());
        styles.insert("line-height".to_string(), self.line_height.to_string());
        styles.insert("color".to_string(), self.color.clone());
        if let Some(spacing) = &self.letter_spacing {
            styles.insert("letter-spacing".to_string(), spacing.clone());
        }
        if let Some(transform) = self.text_transform {
            styles.insert("text-transform".to_string(), transform.as_css().to_string());
        }
        styles
    }
}

pub fn resolve_style(
    role: TextRole,
    config: &TemplateConfig,
    section_override: Option<&TextStyle>,
    options: &StyleOptions,
) -> ResolvedStyle {
    let baseline = Typography::default();
    let baseline = baseline.role(role);
    let template = config.typography.role(role);
    let empty = TextStyle::default();
    let section = section_override.unwrap_or(&empty);

    let font_size = pick(&section.font_size, &template.font_size, &baseline.font_size)
        .unwrap_or_else(|| "11px".to_string());

    let mut text_transform = pick(
        &section.text_transform,
        &template.text_transform,
        &baseline.text_transform,
    );
    if role == TextRole::SectionHeading {
        text_transform = match options.header_case() {
            HeaderCase::Template => text_transform,
            HeaderCase::Uppercase => Some(TextTransform::Uppercase),
            HeaderCase::Capitalize => Some(TextTransform::Capitalize),
            HeaderCase::Lowercase => Some(TextTransform::Lowercase),
        };
    }

    ResolvedStyle {
        font_size: scale_font_size(&font_size, options.scale_factor()),
        font_weight: pick(&section.font_weight, &template.font_weight, &baseline.font_weight)
            .unwrap_or(400),
        line_height: pick(&section.line_height, &template.line_height, &baseline.line_height)
            .unwrap_or(1.4),
        letter_spacing: pick(
            &section.letter_spacing,
            &template.letter_spacing,
            &baseline.letter_spacing,
        ),
        text_transform,
        color: pick(&section.color, &template.color, &baseline.color)
            .unwrap_or_else(|| "#000000".to_string()),
    }
}

fn pick<T: Clone>(section: &Option<T>, template: &Option<T>, baseline: &Option<T>) -> Option<T> {
    section
        .as_ref()
        .or(template.as_ref())
        .or(baseline.as_ref())
        .cloned()
}

/// Multiply a CSS length by `factor`, keeping its unit.
///
/// Values that do not start with a number (`inherit`, `var(--x)`) are
/// returned unchanged. Results are rounded to two decimals.
pub fn scale_font_size(size: &str, factor: f64) -> String {
    let trimmed = size.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let Ok(value) = number.parse::<f64>() else {
        return trimmed.to_string();
    };
    if (factor - 1.0).abs() < f64::EPSILON {
        return trimmed.to_string();
    }

    let scaled = (value * factor * 100.0).round() / 100.0;
    format!("{}{}", scaled, unit)
}
