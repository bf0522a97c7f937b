//! # Vitae Model
//!
//! Plain data shared by every Vitae crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + TemplateConfig            │
//! │  - Immutable, structurally shared Node tree │
//! │  - Validated EditAddress paths              │
//! │  - Section descriptors and presets          │
//! │  - StyleOptions / StyleSettings             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: get/set, list ops, undo, sessions   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: Document + config → RenderNode   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitae_model::{Document, EditAddress, TemplateConfig};
//!
//! let doc = Document::from_json_str(&std::fs::read_to_string("resume.json")?)?;
//! let config = vitae_model::presets::get("modern-sidebar")?;
//! let address: EditAddress = "experience.0.position".parse()?;
//! ```

mod address;
mod config;
mod document;
mod error;
mod node;
pub mod presets;
mod section;
mod style_options;

pub use address::{AddressError, EditAddress, Segment};
pub use config::{
    BackgroundColors, BadgeConfig, ColorConfig, ContactIcons, DatePosition, Edges,
    EducationConfig, ExperienceConfig, FontFamily, HeaderConfig, HeadingStyle, LayoutConfig,
    LayoutType, PhotoPosition, SectionHeadingConfig, SkillsConfig, Spacing, TemplateConfig,
    TextColors, TextRole, TextStyle, TextTransform, Typography,
};
pub use document::{Document, CUSTOM_SECTIONS, LIST_KEYS, PERSONAL_INFO, SETTINGS};
pub use error::{ConfigError, DocumentError};
pub use node::{Node, Record};
pub use section::{Column, SectionDescriptor, SectionType};
pub use style_options::{DateFormat, FontScale, HeaderCase, StyleOptions, StyleSettings, Visibility};
