//! HTML preview output for rendered resumes.
//!
//! Takes the `RenderDocument` produced by `vitae-evaluator` and writes a
//! standalone page: template CSS variables in `:root`, inline styles on
//! every node, and (for editable renders) `data-edit` attributes carrying
//! the serialized `EditAction` of each field.

mod compiler;

pub use compiler::{compile_fragment, compile_to_html, CompileError, CompileOptions};

#[cfg(test)]
mod tests;
