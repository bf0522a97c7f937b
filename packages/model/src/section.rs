//! Section descriptors: which blocks a template shows, in what order and column.

use crate::config::TextStyle;
use crate::document::CUSTOM_SECTIONS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Awards,
    Achievements,
    Volunteer,
    Interests,
    References,
    Custom,
}

impl SectionType {
    pub const ALL: [SectionType; 14] = [
        SectionType::Header,
        SectionType::Summary,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Certifications,
        SectionType::Languages,
        SectionType::Awards,
        SectionType::Achievements,
        SectionType::Volunteer,
        SectionType::Interests,
        SectionType::References,
        SectionType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Summary => "summary",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Certifications => "certifications",
            SectionType::Languages => "languages",
            SectionType::Awards => "awards",
            SectionType::Achievements => "achievements",
            SectionType::Volunteer => "volunteer",
            SectionType::Interests => "interests",
            SectionType::References => "references",
            SectionType::Custom => "custom",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Top-level document list that holds this section's items.
    ///
    /// Header and summary read from `personalInfo` instead. A custom
    /// descriptor reads the `items` of one `customSections` entry.
    pub fn list_key(&self) -> Option<&'static str> {
        match self {
            SectionType::Header | SectionType::Summary => None,
            SectionType::Custom => Some(CUSTOM_SECTIONS),
            other => Some(other.as_str()),
        }
    }

    /// Default heading text
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionType::Header => "Header",
            SectionType::Summary => "Summary",
            SectionType::Experience => "Experience",
            SectionType::Education => "Education",
            SectionType::Skills => "Skills",
            SectionType::Projects => "Projects",
            SectionType::Certifications => "Certifications",
            SectionType::Languages => "Languages",
            SectionType::Awards => "Awards",
            SectionType::Achievements => "Achievements",
            SectionType::Volunteer => "Volunteer Experience",
            SectionType::Interests => "Interests",
            SectionType::References => "References",
            SectionType::Custom => "Additional Information",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    #[default]
    Main,
    Sidebar,
}

/// One orderable, toggleable block of the resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub order: i32,
    /// Absent means main column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    /// Per-section variant pick, wins over the section type's configured variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Section-level typography overrides (property-level, see the style cascade)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<crate::config::TextRole, TextStyle>,
}

fn enabled_by_default() -> bool {
    true
}

impl SectionDescriptor {
    pub fn new(kind: SectionType, id: impl Into<String>, order: i32) -> Self {
        Self {
            kind,
            id: id.into(),
            title: kind.default_title().to_string(),
            enabled: true,
            order,
            column: None,
            variant: None,
            styles: BTreeMap::new(),
        }
    }

    pub fn in_column(mut self, column: Column) -> Self {
        self.column = Some(column);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn column_or_default(&self) -> Column {
        self.column.unwrap_or_default()
    }

    pub fn is_header(&self) -> bool {
        self.kind == SectionType::Header
    }

    /// Title to display, falling back to the type's default heading
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.kind.default_title()
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults_from_json() {
        let json = r#"{ "type": "skills", "id": "skills" }"#;
        let descriptor: SectionDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.kind, SectionType::Skills);
        assert!(descriptor.enabled);
        assert_eq!(descriptor.order, 0);
        assert_eq!(descriptor.column_or_default(), Column::Main);
        assert_eq!(descriptor.display_title(), "Skills");
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(SectionType::Custom.list_key(), Some("customSections"));
        assert_eq!(SectionType::Skills.list_key(), Some("skills"));
        assert_eq!(SectionType::Summary.list_key(), None);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for kind in SectionType::ALL {
            assert_eq!(SectionType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SectionType::parse("bogus"), None);
    }
}
