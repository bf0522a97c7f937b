//! # Style Options
//!
//! Session-scoped presentation preferences that sit on top of a template:
//! font scale, date format, heading case and section visibility.
//!
//! Renderers receive a `StyleOptions` value and can only read it. The
//! editing session owns the single `StyleSettings` through which options
//! change; every change bumps a revision and callers take fresh snapshots.

use crate::section::SectionType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "factor")]
pub enum FontScale {
    Compact,
    #[default]
    Normal,
    Large,
    Custom(f64),
}

impl FontScale {
    pub fn factor(&self) -> f64 {
        match self {
            FontScale::Compact => 0.92,
            FontScale::Normal => 1.0,
            FontScale::Large => 1.08,
            FontScale::Custom(factor) if factor.is_finite() && *factor > 0.0 => *factor,
            FontScale::Custom(_) => 1.0,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "compact" => Some(FontScale::Compact),
            "normal" => Some(FontScale::Normal),
            "large" => Some(FontScale::Large),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map(FontScale::Custom),
        }
    }
}

/// Display format for month/year dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `Mar 2024`
    #[default]
    MonYear,
    /// `March 2024`
    MonthYear,
    /// `03/2024`
    Numeric,
    /// `2024-03`
    Iso,
    /// `2024`
    YearOnly,
}

impl DateFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mon-year" | "MMM YYYY" => Some(DateFormat::MonYear),
            "month-year" | "MMMM YYYY" => Some(DateFormat::MonthYear),
            "numeric" | "MM/YYYY" => Some(DateFormat::Numeric),
            "iso" | "YYYY-MM" => Some(DateFormat::Iso),
            "year-only" | "YYYY" => Some(DateFormat::YearOnly),
            _ => None,
        }
    }
}

/// Global override for section heading text case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCase {
    /// Keep whatever the template sets
    #[default]
    Template,
    Uppercase,
    Capitalize,
    Lowercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Visibility {
    pub photo: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub custom_sections: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            photo: true,
            summary: true,
            experience: true,
            education: true,
            skills: true,
            custom_sections: true,
        }
    }
}

/// Read-only snapshot handed to renderers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    font_scale: FontScale,
    date_format: DateFormat,
    header_case: HeaderCase,
    visibility: Visibility,
}

impl StyleOptions {
    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    pub fn scale_factor(&self) -> f64 {
        self.font_scale.factor()
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn header_case(&self) -> HeaderCase {
        self.header_case
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn show_photo(&self) -> bool {
        self.visibility.photo
    }

    /// Whether a section type is hidden by a visibility toggle.
    ///
    /// Types without a toggle are always shown.
    pub fn is_section_visible(&self, kind: SectionType) -> bool {
        match kind {
            SectionType::Summary => self.visibility.summary,
            SectionType::Experience => self.visibility.experience,
            SectionType::Education => self.visibility.education,
            SectionType::Skills => self.visibility.skills,
            SectionType::Custom => self.visibility.custom_sections,
            _ => true,
        }
    }
}

/// The settings interface that owns and mutates style options
#[derive(Debug, Clone, Default)]
pub struct StyleSettings {
    current: StyleOptions,
    revision: u64,
}

impl StyleSettings {
    pub fn new(initial: StyleOptions) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> StyleOptions {
        self.current.clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_font_scale(&mut self, scale: FontScale) {
        self.update(|options| options.font_scale = scale);
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.update(|options| options.date_format = format);
    }

    pub fn set_header_case(&mut self, case: HeaderCase) {
        self.update(|options| options.header_case = case);
    }

    pub fn set_photo_visible(&mut self, visible: bool) {
        self.update(|options| options.visibility.photo = visible);
    }

    /// Toggle a section type; returns false for types without a toggle
    pub fn set_section_visible(&mut self, kind: SectionType, visible: bool) -> bool {
        let supported = matches!(
            kind,
            SectionType::Summary
                | SectionType::Experience
                | SectionType::Education
                | SectionType::Skills
                | SectionType::Custom
        );
        if supported {
            self.update(|options| {
                let v = &mut options.visibility;
                match kind {
                    SectionType::Summary => v.summary = visible,
                    SectionType::Experience => v.experience = visible,
                    SectionType::Education => v.education = visible,
                    SectionType::Skills => v.skills = visible,
                    _ => v.custom_sections = visible,
                }
            });
        }
        supported
    }

    pub fn reset(&mut self) {
        self.update(|options| *options = StyleOptions::default());
    }

    fn update(&mut self, change: impl FnOnce(&mut StyleOptions)) {
        let before = self.current.clone();
        change(&mut self.current);
        if self.current != before {
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_factors() {
        assert_eq!(FontScale::Compact.factor(), 0.92);
        assert_eq!(FontScale::Large.factor(), 1.08);
        assert_eq!(FontScale::Custom(-2.0).factor(), 1.0);
        assert_eq!(FontScale::parse("1.25"), Some(FontScale::Custom(1.25)));
        assert_eq!(FontScale::parse("huge"), None);
    }

    #[test]
    fn test_settings_produce_snapshots() {
        let mut settings = StyleSettings::default();
        let before = settings.snapshot();

        settings.set_font_scale(FontScale::Large);
        settings.set_section_visible(SectionType::Skills, false);

        assert_eq!(before.scale_factor(), 1.0);
        assert_eq!(settings.snapshot().scale_factor(), 1.08);
        assert!(!settings.snapshot().is_section_visible(SectionType::Skills));
        assert!(settings.snapshot().is_section_visible(SectionType::Languages));
        assert_eq!(settings.revision(), 2);
    }

    #[test]
    fn test_unchanged_setting_keeps_revision() {
        let mut settings = StyleSettings::default();
        settings.set_date_format(DateFormat::MonYear);
        assert_eq!(settings.revision(), 0);
        assert!(!settings.set_section_visible(SectionType::Awards, false));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: StyleOptions =
            serde_json::from_str(r#"{ "dateFormat": "numeric" }"#).unwrap();
        assert_eq!(options.date_format(), DateFormat::Numeric);
        assert_eq!(options.font_scale(), FontScale::Normal);
    }
}
