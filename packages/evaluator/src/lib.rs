//! # Vitae Evaluator
//!
//! Renders a resume `Document` with a `TemplateConfig` into a
//! style-resolved `RenderNode` tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   ┌──────────────┐   ┌─────────────────┐
//! │ TemplateConfig│──►│    layout    │──►│     Renderer    │──► RenderDocument
//! │  + Document   │   │  (columns)   │   │ (page, headings)│
//! └───────────────┘   └──────────────┘   └────────┬────────┘
//!                                                 │ per section
//!                                        ┌────────▼────────┐
//!                                        │ VariantRegistry │
//!                                        │ (type, variant) │
//!                                        └────────┬────────┘
//!                                                 │
//!                          ┌──────────────────────▼───────────────────┐
//!                          │ SectionContext: style cascade, dates,    │
//!                          │ display/editable field rules, EditHooks  │
//!                          └──────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure: the same document, config, options and mode always
//! produce the same tree.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitae_evaluator::{AllowAll, RenderMode, Renderer, VariantOverrides};
//! use vitae_model::{Document, StyleOptions, TemplateConfig};
//!
//! let document = Document::from_json_str(source)?;
//! let output = Renderer::new().render(
//!     &document,
//!     &TemplateConfig::default(),
//!     &StyleOptions::default(),
//!     RenderMode::Display,
//!     &AllowAll,
//!     &VariantOverrides::new(),
//! );
//! println!("{}", serde_json::to_string_pretty(&output)?);
//! ```

pub mod context;
pub mod date;
pub mod hooks;
pub mod layout;
pub mod registry;
pub mod render_node;
pub mod renderer;
pub mod style;
pub mod variants;

pub use context::{RenderMode, SectionContext, PLACEHOLDER};
pub use date::{format_date, format_date_with, format_range, MalformedDate};
pub use hooks::{AllowAll, EditHooks, LockedFields};
pub use layout::{assemble, Columns};
pub use registry::{Strategy, UnknownVariant, VariantInfo, VariantRegistry};
pub use render_node::{EditAction, NodeRole, RenderDocument, RenderNode};
pub use renderer::{RenderPlan, RenderScope, Renderer, VariantOverrides};
pub use style::{resolve_style, scale_font_size, ResolvedStyle};
