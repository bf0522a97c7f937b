//! # Vitae Editor
//!
//! Inline editing engine for resume documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document (immutable Node tree)       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: addressed mutations                 │
//! │  - get/set by EditAddress (resolver)        │
//! │  - id-based list operations (lists)         │
//! │  - Mutation validate/apply/inverse          │
//! │  - undo/redo, sessions, pending queue       │
//! │  - cached re-render (Pipeline)              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: Document + template → RenderNode │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every edit returns a new version that
//!    shares all untouched subtrees with the previous one
//! 2. **Failed edits change nothing**: mutations validate before applying
//! 3. **The render tree drives editing**: editable renders carry
//!    `EditAction`s that `EditSession::dispatch` turns into mutations
//! 4. **Host authority**: pending edits are replayed on whatever base the
//!    host hands back
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitae_editor::{EditSession, Mutation, Pipeline};
//! use vitae_evaluator::RenderMode;
//!
//! let mut session = EditSession::new("client-1", document);
//! let mut pipeline = Pipeline::new(template, RenderMode::Editable);
//!
//! let result = pipeline.apply_mutation(
//!     &mut session,
//!     Mutation::SetField {
//!         address: "experience.0.title".parse()?,
//!         value: Node::text("Lead Engineer"),
//!     },
//! )?;
//!
//! // Only the experience section was re-rendered
//! assert_eq!(result.rerendered, vec!["experience"]);
//! ```

mod errors;
pub mod lists;
mod mutations;
mod pipeline;
pub mod resolver;
mod session;
mod undo_stack;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use pipeline::{CacheStats, Pipeline, PipelineResult, RenderPass};
pub use resolver::{get, set, try_get, PathError};
pub use session::{EditSession, MutationOutput, PendingMutation, RebaseOutcome};
pub use undo_stack::{MutationBatch, UndoStack};
