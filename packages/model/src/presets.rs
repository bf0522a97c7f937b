//! Built-in template presets.
//!
//! Each preset is the default configuration plus a JSON override object.
//! The visual choices are plain data and carry no behavior of their own.

use crate::config::TemplateConfig;
use crate::error::ConfigError;
use serde_json::{json, Value};

struct Preset {
    id: &'static str,
    overrides: fn() -> Value,
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "classic",
        overrides: classic,
    },
    Preset {
        id: "modern-sidebar",
        overrides: modern_sidebar,
    },
    Preset {
        id: "executive-banner",
        overrides: executive_banner,
    },
    Preset {
        id: "minimal-mono",
        overrides: minimal_mono,
    },
    Preset {
        id: "compact-ats",
        overrides: compact_ats,
    },
];

pub fn ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}

pub fn get(id: &str) -> Result<TemplateConfig, ConfigError> {
    let preset = PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))?;
    TemplateConfig::default().with_overrides(&(preset.overrides)())
}

fn classic() -> Value {
    json!({
        "id": "classic",
        "name": "Classic",
        "description": "Serif headings, centered header, underlined sections",
        "header": { "variant": "centered" },
        "sectionHeading": { "style": "underline" },
        "fontFamily": { "primary": "'Georgia', 'Times New Roman', serif" }
    })
}

fn modern_sidebar() -> Value {
    json!({
        "id": "modern-sidebar",
        "name": "Modern Sidebar",
        "category": "modern",
        "layout": {
            "type": "two-column-right",
            "mainWidth": "62%",
            "sidebarWidth": "35%",
            "columnGap": "24px",
            "sidebarBackground": "#f3f4f6",
            "sidebarPadding": "16px"
        },
        "header": { "variant": "modern-split" },
        "skills": { "variant": "bars", "showRatings": true },
        "sectionHeading": { "style": "left-bar" },
        "variants": { "languages": "compact", "interests": "pills" },
        "sections": [
            { "type": "header", "id": "header", "order": 0 },
            { "type": "summary", "id": "summary", "order": 1, "column": "main" },
            { "type": "experience", "id": "experience", "order": 2, "column": "main" },
            { "type": "projects", "id": "projects", "order": 3, "column": "main" },
            { "type": "education", "id": "education", "order": 4, "column": "main" },
            { "type": "skills", "id": "skills", "order": 1, "column": "sidebar" },
            { "type": "languages", "id": "languages", "order": 2, "column": "sidebar" },
            { "type": "certifications", "id": "certifications", "order": 3, "column": "sidebar" },
            { "type": "interests", "id": "interests", "order": 4, "column": "sidebar" }
        ]
    })
}

fn executive_banner() -> Value {
    json!({
        "id": "executive-banner",
        "name": "Executive Banner",
        "category": "executive",
        "header": {
            "variant": "banner",
            "backgroundColor": "#1e293b",
            "textColor": "#ffffff",
            "padding": "24px 32px"
        },
        "colors": { "primary": "#1e293b" },
        "experience": { "variant": "detailed" },
        "sectionHeading": { "style": "background" },
        "spacing": {
            "pagePadding": { "top": "0px", "right": "32px", "bottom": "32px", "left": "32px" }
        }
    })
}

fn minimal_mono() -> Value {
    json!({
        "id": "minimal-mono",
        "name": "Minimal Mono",
        "category": "minimal",
        "header": { "variant": "minimal", "contactIcons": { "show": false } },
        "skills": { "variant": "inline", "separator": " / " },
        "experience": { "variant": "minimal", "datePosition": "inline" },
        "sectionHeading": { "style": "minimal" },
        "colors": { "primary": "#111827" },
        "typography": {
            "title": { "color": "#111827" },
            "itemSubtitle": { "color": "#374151" }
        }
    })
}

fn compact_ats() -> Value {
    json!({
        "id": "compact-ats",
        "name": "Compact ATS",
        "description": "Single column, no icons, dense spacing for applicant tracking systems",
        "category": "ats",
        "header": { "variant": "compact", "contactIcons": { "show": false }, "showSocialLinks": false },
        "skills": { "variant": "list" },
        "experience": { "variant": "compact" },
        "education": { "variant": "compact", "showGPA": false },
        "spacing": {
            "pagePadding": { "top": "24px", "right": "28px", "bottom": "24px", "left": "28px" },
            "sectionGap": "14px",
            "itemGap": "10px",
            "headingToContent": "6px",
            "bulletGap": "3px",
            "contactGap": "8px",
            "skillGap": "6px"
        }
    })
}
