//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each mutation records its inverse before being applied
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo reapplies the original mutations
//! - New mutations clear the redo stack
//! - Batches group several mutations into one undo step
//!
//! Documents are immutable values, so every operation takes the current
//! version and returns the next one.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! let edited = stack.apply(&mutation, &doc)?;
//! let restored = stack.undo(&edited)?.unwrap_or(edited);
//! ```

use crate::{Mutation, MutationError};
use vitae_model::Document;

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone, PartialEq)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    pub description: Option<String>,
}

impl MutationBatch {
    pub fn single(mutation: Mutation, inverse: Mutation) -> Self {
        Self {
            mutations: vec![mutation],
            inverses: vec![inverse],
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn empty() -> Self {
        Self {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        }
    }
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Applied batches (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Undone batches (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: &Mutation, doc: &Document) -> Result<Document, MutationError> {
        // Inverse is computed against the pre-edit document
        let inverse = mutation.to_inverse(doc)?;
        let updated = mutation.apply(doc)?;
        self.record(mutation.clone(), inverse);
        Ok(updated)
    }

    /// Record an already-applied mutation and its inverse
    pub fn record(&mut self, mutation: Mutation, inverse: Mutation) {
        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation);
            batch.inverses.insert(0, inverse);
        } else {
            self.push_batch(MutationBatch::single(mutation, inverse));
        }
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch::empty());
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn in_batch(&self) -> bool {
        self.current_batch.is_some()
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Undo the most recent batch; `None` when there is nothing to undo
    ///
    /// On error the stacks are left as they were.
    pub fn undo(&mut self, doc: &Document) -> Result<Option<Document>, MutationError> {
        let Some(batch) = self.undo_stack.last() else {
            return Ok(None);
        };
        let restored = apply_all(&batch.inverses, doc)?;

        if let Some(batch) = self.undo_stack.pop() {
            self.redo_stack.push(batch);
        }
        Ok(Some(restored))
    }

    /// Redo the most recently undone batch; `None` when there is nothing to redo
    pub fn redo(&mut self, doc: &Document) -> Result<Option<Document>, MutationError> {
        let Some(batch) = self.redo_stack.last() else {
            return Ok(None);
        };
        let reapplied = apply_all(&batch.mutations, doc)?;

        if let Some(batch) = self.redo_stack.pop() {
            self.undo_stack.push(batch);
        }
        Ok(Some(reapplied))
    }

    /// Batch the next `undo` would revert
    pub fn peek_undo(&self) -> Option<&MutationBatch> {
        self.undo_stack.last()
    }

    /// Batch the next `redo` would reapply
    pub fn peek_redo(&self) -> Option<&MutationBatch> {
        self.redo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_all(mutations: &[Mutation], doc: &Document) -> Result<Document, MutationError> {
    mutations
        .iter()
        .try_fold(doc.clone(), |current, mutation| mutation.apply(&current))
}
