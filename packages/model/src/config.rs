//! # Template Configuration
//!
//! Presentational configuration for a resume: typography per semantic
//! role, spacing, colors, layout, per-section variant picks and the
//! ordered section descriptors.
//!
//! A `TemplateConfig` is built once (from `Default`, a preset or JSON)
//! and is never mutated afterwards. Derived configs (`with_overrides`,
//! `with_theme_colors`) are new values.

use crate::document::{Document, CUSTOM_SECTIONS};
use crate::error::ConfigError;
use crate::section::{Column, SectionDescriptor, SectionType};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Semantic text roles that carry their own typography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    Name,
    Title,
    SectionHeading,
    ItemTitle,
    ItemSubtitle,
    Dates,
    Body,
    Contact,
    Small,
}

impl TextRole {
    pub const ALL: [TextRole; 9] = [
        TextRole::Name,
        TextRole::Title,
        TextRole::SectionHeading,
        TextRole::ItemTitle,
        TextRole::ItemSubtitle,
        TextRole::Dates,
        TextRole::Body,
        TextRole::Contact,
        TextRole::Small,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }
}

/// Partial text style; unset properties fall through the style cascade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    fn full(font_size: &str, font_weight: u16, line_height: f32, color: &str) -> Self {
        Self {
            font_size: Some(font_size.to_string()),
            font_weight: Some(font_weight),
            line_height: Some(line_height),
            letter_spacing: None,
            text_transform: None,
            color: Some(color.to_string()),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub name: TextStyle,
    pub title: TextStyle,
    pub section_heading: TextStyle,
    pub item_title: TextStyle,
    pub item_subtitle: TextStyle,
    pub dates: TextStyle,
    pub body: TextStyle,
    pub contact: TextStyle,
    pub small: TextStyle,
}

impl Typography {
    pub fn role(&self, role: TextRole) -> &TextStyle {
        match role {
            TextRole::Name => &self.name,
            TextRole::Title => &self.title,
            TextRole::SectionHeading => &self.section_heading,
            TextRole::ItemTitle => &self.item_title,
            TextRole::ItemSubtitle => &self.item_subtitle,
            TextRole::Dates => &self.dates,
            TextRole::Body => &self.body,
            TextRole::Contact => &self.contact,
            TextRole::Small => &self.small,
        }
    }

    fn role_mut(&mut self, role: TextRole) -> &mut TextStyle {
        match role {
            TextRole::Name => &mut self.name,
            TextRole::Title => &mut self.title,
            TextRole::SectionHeading => &mut self.section_heading,
            TextRole::ItemTitle => &mut self.item_title,
            TextRole::ItemSubtitle => &mut self.item_subtitle,
            TextRole::Dates => &mut self.dates,
            TextRole::Body => &mut self.body,
            TextRole::Contact => &mut self.contact,
            TextRole::Small => &mut self.small,
        }
    }
}

impl Default for Typography {
    /// Baseline resume typography: 11px body, 22px name
    fn default() -> Self {
        let mut name = TextStyle::full("22px", 700, 1.2, "#000000");
        name.letter_spacing = Some("-0.02em".to_string());
        let mut section_heading = TextStyle::full("11px", 600, 1.3, "#000000");
        section_heading.letter_spacing = Some("0.05em".to_string());
        section_heading.text_transform = Some(TextTransform::Uppercase);

        Self {
            name,
            title: TextStyle::full("12px", 500, 1.4, "#2563eb"),
            section_heading,
            item_title: TextStyle::full("12px", 600, 1.4, "#000000"),
            item_subtitle: TextStyle::full("11px", 500, 1.4, "#2563eb"),
            dates: TextStyle::full("10px", 400, 1.4, "#6b7280"),
            body: TextStyle::full("11px", 400, 1.6, "#1a1a1a"),
            contact: TextStyle::full("10px", 400, 1.5, "#1a1a1a"),
            small: TextStyle::full("10px", 400, 1.4, "#6b7280"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Edges {
    pub fn uniform(value: &str) -> Self {
        Self {
            top: value.to_string(),
            right: value.to_string(),
            bottom: value.to_string(),
            left: value.to_string(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    pub page_padding: Edges,
    pub section_gap: String,
    pub item_gap: String,
    pub heading_to_content: String,
    pub bullet_gap: String,
    pub contact_gap: String,
    pub skill_gap: String,
}

impl Spacing {
    pub fn compact() -> Self {
        Self {
            page_padding: Edges {
                top: "24px".to_string(),
                right: "28px".to_string(),
                bottom: "24px".to_string(),
                left: "28px".to_string(),
            },
            section_gap: "14px".to_string(),
            item_gap: "10px".to_string(),
            heading_to_content: "6px".to_string(),
            bullet_gap: "3px".to_string(),
            contact_gap: "8px".to_string(),
            skill_gap: "6px".to_string(),
        }
    }

    pub fn generous() -> Self {
        Self {
            page_padding: Edges::uniform("40px"),
            section_gap: "22px".to_string(),
            item_gap: "14px".to_string(),
            heading_to_content: "10px".to_string(),
            bullet_gap: "4px".to_string(),
            contact_gap: "16px".to_string(),
            skill_gap: "8px".to_string(),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            page_padding: Edges::uniform("32px"),
            section_gap: "18px".to_string(),
            item_gap: "12px".to_string(),
            heading_to_content: "8px".to_string(),
            bullet_gap: "4px".to_string(),
            contact_gap: "12px".to_string(),
            skill_gap: "8px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    SingleColumn,
    /// Sidebar on the left
    TwoColumnLeft,
    /// Sidebar on the right
    #[serde(alias = "two-column")]
    TwoColumnRight,
}

impl LayoutType {
    pub fn is_single_column(&self) -> bool {
        matches!(self, LayoutType::SingleColumn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub kind: LayoutType,
    pub main_width: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_padding: Option<String>,
}

impl LayoutConfig {
    pub fn two_column(kind: LayoutType) -> Self {
        Self {
            kind,
            main_width: "62%".to_string(),
            sidebar_width: Some("35%".to_string()),
            column_gap: Some("24px".to_string()),
            sidebar_background: None,
            sidebar_padding: None,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            kind: LayoutType::SingleColumn,
            main_width: "100%".to_string(),
            sidebar_width: None,
            column_gap: None,
            sidebar_background: None,
            sidebar_padding: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub light: String,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: "#000000".to_string(),
            secondary: "#1a1a1a".to_string(),
            muted: "#6b7280".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundColors {
    pub page: String,
    pub section: String,
    pub accent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
}

impl Default for BackgroundColors {
    fn default() -> Self {
        Self {
            page: "#ffffff".to_string(),
            section: "#f9fafb".to_string(),
            accent: "#eff6ff".to_string(),
            sidebar: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: None,
            text: TextColors::default(),
            background: BackgroundColors::default(),
            border: "#e5e7eb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingStyle {
    #[default]
    Simple,
    Underline,
    LeftBar,
    Background,
    Minimal,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionHeadingConfig {
    pub style: HeadingStyle,
    pub margin_bottom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl Default for SectionHeadingConfig {
    fn default() -> Self {
        Self {
            style: HeadingStyle::Simple,
            margin_bottom: "12px".to_string(),
            border_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPosition {
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactIcons {
    pub show: bool,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for ContactIcons {
    fn default() -> Self {
        Self {
            show: true,
            size: "14px".to_string(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    pub variant: String,
    pub show_photo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_position: Option<PhotoPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<String>,
    pub contact_icons: ContactIcons,
    pub show_social_links: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            variant: "left-aligned".to_string(),
            show_photo: false,
            photo_position: None,
            photo_size: None,
            contact_icons: ContactIcons::default(),
            show_social_links: true,
            background_color: None,
            text_color: None,
            padding: None,
            margin_bottom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeConfig {
    pub font_size: String,
    pub padding: String,
    pub border_radius: String,
    pub border_width: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            font_size: "12px".to_string(),
            padding: "4px 12px".to_string(),
            border_radius: "9999px".to_string(),
            border_width: "1px".to_string(),
            background_color: None,
            border_color: None,
            text_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsConfig {
    pub variant: String,
    pub columns: u8,
    pub show_ratings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    pub badge: BadgeConfig,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            variant: "pills".to_string(),
            columns: 3,
            show_ratings: false,
            separator: None,
            badge: BadgeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePosition {
    #[default]
    Right,
    Below,
    Inline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceConfig {
    pub variant: String,
    pub date_position: DatePosition,
    pub show_location: bool,
    pub bullet_style: String,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            variant: "standard".to_string(),
            date_position: DatePosition::Right,
            show_location: true,
            bullet_style: "•".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationConfig {
    pub variant: String,
    #[serde(rename = "showGPA")]
    pub show_gpa: bool,
    pub show_field: bool,
    pub show_dates: bool,
    pub date_position: DatePosition,
}

impl Default for EducationConfig {
    fn default() -> Self {
        Self {
            variant: "standard".to_string(),
            show_gpa: true,
            show_field: true,
            show_dates: true,
            date_position: DatePosition::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFamily {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl Default for FontFamily {
    fn default() -> Self {
        Self {
            primary: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            secondary: Some("'Georgia', 'Times New Roman', serif".to_string()),
        }
    }
}

/// Immutable presentational configuration for one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub typography: Typography,
    pub spacing: Spacing,
    pub layout: LayoutConfig,
    pub colors: ColorConfig,
    pub section_heading: SectionHeadingConfig,
    pub header: HeaderConfig,
    pub skills: SkillsConfig,
    pub experience: ExperienceConfig,
    pub education: EducationConfig,
    /// Variant picks for section types without a dedicated sub-config
    pub variants: BTreeMap<SectionType, String>,
    pub sections: Vec<SectionDescriptor>,
    pub font_family: FontFamily,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default Template".to_string(),
            description: "A clean, professional resume template".to_string(),
            category: "professional".to_string(),
            typography: Typography::default(),
            spacing: Spacing::default(),
            layout: LayoutConfig::default(),
            colors: ColorConfig::default(),
            section_heading: SectionHeadingConfig::default(),
            header: HeaderConfig::default(),
            skills: SkillsConfig::default(),
            experience: ExperienceConfig::default(),
            education: EducationConfig::default(),
            variants: BTreeMap::new(),
            sections: default_sections(),
            font_family: FontFamily::default(),
        }
    }
}

fn default_sections() -> Vec<SectionDescriptor> {
    use SectionType::*;
    vec![
        SectionDescriptor::new(Header, "header", 0),
        SectionDescriptor::new(Summary, "summary", 1).in_column(Column::Main),
        SectionDescriptor::new(Experience, "experience", 2).in_column(Column::Main),
        SectionDescriptor::new(Education, "education", 3).in_column(Column::Main),
        SectionDescriptor::new(Skills, "skills", 4).in_column(Column::Main),
        SectionDescriptor::new(Projects, "projects", 5).in_column(Column::Main).disabled(),
        SectionDescriptor::new(Certifications, "certifications", 6)
            .in_column(Column::Sidebar)
            .disabled(),
        SectionDescriptor::new(Languages, "languages", 7)
            .in_column(Column::Sidebar)
            .disabled(),
        SectionDescriptor::new(Awards, "awards", 8).in_column(Column::Main).disabled(),
        SectionDescriptor::new(Volunteer, "volunteer", 9).in_column(Column::Main).disabled(),
        SectionDescriptor::new(Interests, "interests", 10)
            .in_column(Column::Sidebar)
            .disabled(),
    ]
}

impl TemplateConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: TemplateConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the section invariant: at most one descriptor per (type, id)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert((section.kind, section.id.as_str())) {
                return Err(ConfigError::DuplicateSection {
                    kind: section.kind,
                    id: section.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Variant configured for a section type, before per-section or per-render picks
    pub fn configured_variant(&self, kind: SectionType) -> Option<&str> {
        match kind {
            SectionType::Header => Some(self.header.variant.as_str()),
            SectionType::Skills => Some(self.skills.variant.as_str()),
            SectionType::Experience => Some(self.experience.variant.as_str()),
            SectionType::Education => Some(self.education.variant.as_str()),
            other => self.variants.get(&other).map(String::as_str),
        }
    }

    pub fn section(&self, kind: SectionType, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.kind == kind && s.id == id)
    }

    pub fn header_section(&self) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.is_header())
    }

    /// This config plus a custom descriptor for every `customSections`
    /// entry of `document` that no descriptor places yet.
    ///
    /// Added descriptors follow the highest configured order, in document
    /// order. Titles mentioning strengths or achievements go to the sidebar.
    pub fn with_custom_sections(&self, document: &Document) -> Cow<'_, TemplateConfig> {
        let max_order = self.sections.iter().map(|s| s.order).max().unwrap_or(0).max(0);
        let missing: Vec<SectionDescriptor> = document
            .list(CUSTOM_SECTIONS)
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let id = entry.id()?;
                if self.section(SectionType::Custom, id).is_some() {
                    return None;
                }
                let title = entry.text_field("title").unwrap_or(id);
                let lower = title.to_lowercase();
                let column = if lower.contains("strength") || lower.contains("achievement") {
                    Column::Sidebar
                } else {
                    Column::Main
                };
                Some(
                    SectionDescriptor::new(SectionType::Custom, id, max_order + index as i32 + 1)
                        .with_title(title)
                        .in_column(column),
                )
            })
            .collect();

        if missing.is_empty() {
            return Cow::Borrowed(self);
        }
        debug!(template = %self.id, added = missing.len(), "Placed custom sections");
        let mut config = self.clone();
        config.sections.extend(missing);
        Cow::Owned(config)
    }

    /// Deep-merge a partial JSON object onto this config.
    ///
    /// Objects merge key by key; arrays and scalars replace. The result is
    /// validated again.
    pub fn with_overrides(&self, overrides: &serde_json::Value) -> Result<Self, ConfigError> {
        if !overrides.is_object() {
            return Err(ConfigError::OverridesNotAnObject(json_kind(overrides)));
        }

        let mut base = serde_json::to_value(self)?;
        deep_merge(&mut base, overrides);
        let config: TemplateConfig = serde_json::from_value(base)?;
        config.validate()?;

        debug!(template = %config.id, "Applied template overrides");
        Ok(config)
    }

    /// Recolor accent elements (primary) and sidebar/banner backgrounds (secondary)
    pub fn with_theme_colors(&self, primary: Option<&str>, secondary: Option<&str>) -> Self {
        let mut result = self.clone();

        if let Some(primary) = primary {
            result.colors.primary = primary.to_string();
            result.colors.background.accent = format!("{}15", primary);
            for role in [TextRole::Title, TextRole::SectionHeading, TextRole::ItemSubtitle] {
                result.typography.role_mut(role).color = Some(primary.to_string());
            }
            result.section_heading.border_color = Some(primary.to_string());
            result.skills.badge.background_color = Some(primary.to_string());
            result.skills.badge.border_color = Some(primary.to_string());
            result.skills.badge.text_color = Some("#ffffff".to_string());
            result.header.contact_icons.color = Some(primary.to_string());
        }

        if let Some(secondary) = secondary {
            result.colors.secondary = Some(secondary.to_string());
            result.colors.background.sidebar = Some(secondary.to_string());
            if result.layout.sidebar_background.is_some() {
                result.layout.sidebar_background = Some(secondary.to_string());
            }
            if result.header.background_color.is_some() {
                result.header.background_color = Some(secondary.to_string());
            }
        }

        result
    }

    /// `--resume-*` custom properties for hosts that paint with CSS
    pub fn css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        let mut put = |key: &str, value: &str| {
            vars.insert(key.to_string(), value.to_string());
        };

        put("--resume-font-primary", &self.font_family.primary);
        put(
            "--resume-font-secondary",
            self.font_family
                .secondary
                .as_deref()
                .unwrap_or(&self.font_family.primary),
        );
        put("--resume-color-primary", &self.colors.primary);
        put("--resume-color-text-primary", &self.colors.text.primary);
        put("--resume-color-text-secondary", &self.colors.text.secondary);
        put("--resume-color-text-muted", &self.colors.text.muted);
        put("--resume-color-bg-page", &self.colors.background.page);
        put("--resume-color-border", &self.colors.border);
        put("--resume-spacing-section", &self.spacing.section_gap);
        put("--resume-spacing-item", &self.spacing.item_gap);
        vars
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn deep_merge(target: &mut serde_json::Value, source: &serde_json::Value) {
    match (target, source) {
        (serde_json::Value::Object(target), serde_json::Value::Object(source)) => {
            for (key, value) in source {
                if value.is_null() {
                    continue;
                }
                match target.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value)
                    }
                    _ => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = TemplateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sections.len(), 11);
        assert_eq!(config.header_section().map(|s| s.id.as_str()), Some("header"));
    }

    #[test]
    fn test_duplicate_sections_rejected() {
        let mut config = TemplateConfig::default();
        config
            .sections
            .push(SectionDescriptor::new(SectionType::Skills, "skills", 20));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSection { kind: SectionType::Skills, .. })
        ));
    }

    #[test]
    fn test_same_id_different_type_is_allowed() {
        let mut config = TemplateConfig::default();
        config
            .sections
            .push(SectionDescriptor::new(SectionType::Custom, "skills", 20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unplaced_custom_sections_are_appended() {
        let document = Document::from_json(json!({
            "customSections": [
                {"id": "c1", "title": "Publications", "items": []},
                {"id": "c2", "title": "Key Achievements", "items": []},
                {"id": "c3", "items": []}
            ]
        }))
        .unwrap();
        let mut config = TemplateConfig::default();
        config.sections.push(SectionDescriptor::new(SectionType::Custom, "c1", 3));
        let max_order = config.sections.iter().map(|s| s.order).max().unwrap();

        let placed = config.with_custom_sections(&document);
        assert!(matches!(placed, Cow::Owned(_)));
        assert_eq!(placed.sections.len(), config.sections.len() + 2);

        let c2 = placed.section(SectionType::Custom, "c2").unwrap();
        assert_eq!(c2.order, max_order + 2);
        assert_eq!(c2.column, Some(Column::Sidebar));
        assert_eq!(c2.display_title(), "Key Achievements");
        assert!(c2.enabled);

        let c3 = placed.section(SectionType::Custom, "c3").unwrap();
        assert_eq!(c3.order, max_order + 3);
        assert_eq!(c3.column, Some(Column::Main));
        assert_eq!(c3.display_title(), "c3");
        // the configured descriptor is left alone
        assert_eq!(placed.section(SectionType::Custom, "c1").map(|s| s.order), Some(3));
        assert!(placed.validate().is_ok());
    }

    #[test]
    fn test_placed_custom_sections_borrow_config() {
        let document = Document::from_json(json!({
            "customSections": [{"id": "c1", "title": "Publications", "items": []}]
        }))
        .unwrap();
        let mut config = TemplateConfig::default();
        config.sections.push(SectionDescriptor::new(SectionType::Custom, "c1", 20));

        assert!(matches!(config.with_custom_sections(&document), Cow::Borrowed(_)));
    }

    #[test]
    fn test_overrides_merge_partially() {
        let config = TemplateConfig::default()
            .with_overrides(&json!({
                "id": "custom",
                "typography": { "name": { "fontSize": "28px" } },
                "layout": { "type": "two-column" }
            }))
            .unwrap();

        assert_eq!(config.id, "custom");
        assert_eq!(config.typography.name.font_size.as_deref(), Some("28px"));
        // sibling property kept from the base
        assert_eq!(config.typography.name.font_weight, Some(700));
        assert_eq!(config.layout.kind, LayoutType::TwoColumnRight);
        assert_eq!(config.layout.main_width, "100%");
    }

    #[test]
    fn test_overrides_must_be_object() {
        let result = TemplateConfig::default().with_overrides(&json!([1, 2]));
        assert!(matches!(result, Err(ConfigError::OverridesNotAnObject("array"))));
    }

    #[test]
    fn test_theme_colors() {
        let base = TemplateConfig::default();
        let themed = base.with_theme_colors(Some("#059669"), Some("#111827"));

        assert_eq!(themed.colors.primary, "#059669");
        assert_eq!(themed.colors.background.accent, "#05966915");
        assert_eq!(themed.typography.section_heading.color.as_deref(), Some("#059669"));
        assert_eq!(themed.skills.badge.text_color.as_deref(), Some("#ffffff"));
        assert_eq!(themed.colors.background.sidebar.as_deref(), Some("#111827"));
        // only recolored when the template already paints it
        assert_eq!(themed.layout.sidebar_background, None);
        // base untouched
        assert_eq!(base.colors.primary, "#2563eb");
    }

    #[test]
    fn test_configured_variant_lookup() {
        let mut config = TemplateConfig::default();
        config
            .variants
            .insert(SectionType::Languages, "pills".to_string());

        assert_eq!(config.configured_variant(SectionType::Skills), Some("pills"));
        assert_eq!(config.configured_variant(SectionType::Header), Some("left-aligned"));
        assert_eq!(config.configured_variant(SectionType::Languages), Some("pills"));
        assert_eq!(config.configured_variant(SectionType::Interests), None);
    }

    #[test]
    fn test_css_variables() {
        let vars = TemplateConfig::default().css_variables();
        assert_eq!(vars.get("--resume-color-primary").map(String::as_str), Some("#2563eb"));
        assert_eq!(vars.len(), 10);
    }
}
