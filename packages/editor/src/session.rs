//! # Edit Session Management
//!
//! An `EditSession` is one writer's view of a resume: the last document
//! the host acknowledged (`base`), the local document with optimistic
//! edits on top, the undo history and the style settings.
//!
//! Every applied mutation is queued as pending until the host confirms
//! it. When the host hands back a newer base (another writer saved), the
//! pending queue is replayed on top of it. Replays that no longer apply
//! are dropped, and conflicting `SetField`s resolve last-write-wins.

use crate::lists;
use crate::{EditorError, Mutation, UndoStack};
use tracing::{debug, info, warn};
use vitae_evaluator::EditAction;
use vitae_model::{Document, EditAddress, Node, StyleOptions, StyleSettings};

pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Last acknowledged document
    base: Document,

    /// `base` plus all pending mutations
    document: Document,

    version: u64,
    history: UndoStack,
    settings: StyleSettings,

    /// Mutations applied locally but not yet confirmed
    pending_mutations: Vec<PendingMutation>,

    next_seq: u64,
}

/// Mutation waiting for host acknowledgment
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    pub id: String,
    pub mutation: Mutation,
}

/// What an applied mutation produced
#[derive(Debug, Clone)]
pub struct MutationOutput {
    /// Pending id to confirm or reject later
    pub id: String,
    pub version: u64,
    pub document: Document,
    /// Field or list the mutation changed
    pub address: EditAddress,
}

/// Result of replaying pending mutations on a new base
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebaseOutcome {
    pub kept: usize,
    /// Pending ids that no longer applied
    pub dropped: Vec<String>,
}

impl EditSession {
    pub fn new(id: impl Into<String>, document: Document) -> Self {
        Self::with_settings(id, document, StyleSettings::default())
    }

    pub fn with_settings(id: impl Into<String>, document: Document, settings: StyleSettings) -> Self {
        Self {
            id: id.into(),
            base: document.clone(),
            document,
            version: 0,
            history: UndoStack::new(),
            settings,
            pending_mutations: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn base(&self) -> &Document {
        &self.base
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut StyleSettings {
        &mut self.settings
    }

    /// Snapshot handed to renderers
    pub fn style_options(&self) -> StyleOptions {
        self.settings.snapshot()
    }

    pub fn pending(&self) -> &[PendingMutation] {
        &self.pending_mutations
    }

    pub fn pending_count(&self) -> usize {
        self.pending_mutations.len()
    }

    /// Apply a mutation optimistically and queue it as pending
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutput, EditorError> {
        let updated = self.history.apply(&mutation, &self.document)?;
        let address = mutation.address().clone();
        debug!(session = %self.id, kind = mutation.kind(), address = %address, "Applied mutation");

        let id = self.enqueue(mutation);
        self.document = updated;
        self.version += 1;

        Ok(MutationOutput {
            id,
            version: self.version,
            document: self.document.clone(),
            address,
        })
    }

    /// Turn a render-tree edit action plus user payload into a mutation and apply it
    pub fn dispatch(&mut self, action: &EditAction, payload: Node) -> Result<MutationOutput, EditorError> {
        let mutation = self.mutation_for(action, payload)?;
        self.apply(mutation)
    }

    fn mutation_for(&self, action: &EditAction, payload: Node) -> Result<Mutation, EditorError> {
        Ok(match action {
            EditAction::SetField { address } => Mutation::SetField {
                address: address.clone(),
                value: payload,
            },

            EditAction::AddItem { list } => Mutation::AddItem {
                list: list.clone(),
                item: self.new_item(list, payload)?,
            },

            EditAction::RemoveItem { list, id } => Mutation::RemoveItem {
                list: list.clone(),
                id: id.clone(),
            },

            EditAction::MoveItem { list, id } => {
                let to_index = match payload.as_f64() {
                    Some(n) if n >= 0.0 && n.fract() == 0.0 => n as usize,
                    _ => {
                        return Err(EditorError::InvalidPayload {
                            action: "moveItem",
                            reason: format!("expected a target index, got {}", payload.kind()),
                        })
                    }
                };
                Mutation::MoveItem {
                    list: list.clone(),
                    id: id.clone(),
                    to_index,
                }
            }

            EditAction::InsertValue { list, index } => Mutation::InsertValue {
                list: list.clone(),
                index: *index,
                value: if payload.is_null() { Node::text("") } else { payload },
            },

            EditAction::RemoveValue { list, index } => Mutation::RemoveValue {
                list: list.clone(),
                index: *index,
            },
        })
    }

    /// Record for an AddItem action, with a fresh id when the payload has none
    fn new_item(&self, list: &EditAddress, payload: Node) -> Result<Node, EditorError> {
        let mut record = match payload {
            Node::Null => Default::default(),
            Node::Map(record) => (*record).clone(),
            other => {
                return Err(EditorError::InvalidPayload {
                    action: "addItem",
                    reason: format!("expected a record, got {}", other.kind()),
                })
            }
        };

        if Node::map(record.clone()).id().is_none() {
            let items = lists::entries(&self.document, list)?;
            let prefix = list.to_string().replace('.', "-");
            let mut n = items.len();
            let id = loop {
                let candidate = format!("{}-{}", prefix, n);
                if lists::position_of(&items, &candidate).is_none() {
                    break candidate;
                }
                n += 1;
            };
            record.insert("id".to_string(), Node::text(id));
        }

        Ok(Node::map(record))
    }

    /// Group the following mutations into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Undo the last batch; the inverses are queued as pending edits
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let Some(inverses) = self.history.peek_undo().map(|batch| batch.inverses.clone()) else {
            return Ok(false);
        };
        match self.history.undo(&self.document)? {
            Some(restored) => {
                self.commit_local(restored, inverses);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let Some(mutations) = self.history.peek_redo().map(|batch| batch.mutations.clone()) else {
            return Ok(false);
        };
        match self.history.redo(&self.document)? {
            Some(reapplied) => {
                self.commit_local(reapplied, mutations);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn commit_local(&mut self, document: Document, mutations: Vec<Mutation>) {
        for mutation in mutations {
            self.enqueue(mutation);
        }
        self.document = document;
        self.version += 1;
    }

    fn enqueue(&mut self, mutation: Mutation) -> String {
        let id = format!("{}-{}", self.id, self.next_seq);
        self.next_seq += 1;
        self.pending_mutations.push(PendingMutation {
            id: id.clone(),
            mutation,
        });
        id
    }

    /// Host accepted `mutation_id` and everything queued before it
    pub fn confirm(&mut self, mutation_id: &str) -> Result<(), EditorError> {
        let position = self
            .pending_mutations
            .iter()
            .position(|m| m.id == mutation_id)
            .ok_or_else(|| EditorError::UnknownPending(mutation_id.to_string()))?;

        let base = self.pending_mutations[..=position]
            .iter()
            .try_fold(self.base.clone(), |base, pending| pending.mutation.apply(&base))?;

        self.pending_mutations.drain(..=position);
        self.base = base;
        debug!(session = %self.id, confirmed = position + 1, "Confirmed pending mutations");
        Ok(())
    }

    pub fn confirm_all(&mut self) -> Result<(), EditorError> {
        match self.pending_mutations.last().map(|m| m.id.clone()) {
            Some(last) => self.confirm(&last),
            None => Ok(()),
        }
    }

    /// Host refused a mutation; the local document is rebuilt without it
    pub fn reject(&mut self, mutation_id: &str) -> Result<RebaseOutcome, EditorError> {
        let before = self.pending_mutations.len();
        self.pending_mutations.retain(|m| m.id != mutation_id);
        if self.pending_mutations.len() == before {
            return Err(EditorError::UnknownPending(mutation_id.to_string()));
        }

        let base = self.base.clone();
        Ok(self.rebase(base))
    }

    /// Replay pending mutations on top of a newer base document
    pub fn rebase(&mut self, new_base: Document) -> RebaseOutcome {
        let pending = std::mem::take(&mut self.pending_mutations);
        let mut document = new_base.clone();
        let mut outcome = RebaseOutcome::default();

        for pm in pending {
            match pm.mutation.apply(&document) {
                Ok(updated) => {
                    document = updated;
                    self.pending_mutations.push(pm);
                    outcome.kept += 1;
                }
                Err(error) => {
                    warn!(session = %self.id, mutation = %pm.id, error = %error, "Dropped pending mutation on rebase");
                    outcome.dropped.push(pm.id);
                }
            }
        }

        self.base = new_base;
        self.document = document;
        self.version += 1;
        // inverses were computed against documents that no longer exist
        self.history.clear();

        info!(session = %self.id, kept = outcome.kept, dropped = outcome.dropped.len(), "Rebased session");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Document {
        Document::from_json(json!({
            "personalInfo": {"fullName": "Ada"},
            "experience": [{"id": "e1", "title": "Eng", "bulletPoints": []}],
            "skills": [{"id": "s1", "name": "Rust"}]
        }))
        .unwrap()
    }

    fn address(raw: &str) -> EditAddress {
        EditAddress::parse(raw).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("client-1", document());
        assert_eq!(session.id, "client-1");
        assert_eq!(session.pending_count(), 0);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_apply_queues_pending_and_bumps_version() {
        let mut session = EditSession::new("client-1", document());
        let output = session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("Ada King"),
            })
            .unwrap();

        assert_eq!(output.id, "client-1-0");
        assert_eq!(output.version, 1);
        assert_eq!(output.address, address("personalInfo.fullName"));
        assert_eq!(session.pending_count(), 1);
        assert_eq!(session.base().personal_info().text_field("fullName"), Some("Ada"));
    }

    #[test]
    fn test_failed_apply_changes_nothing() {
        let mut session = EditSession::new("client-1", document());
        let result = session.apply(Mutation::RemoveItem {
            list: address("skills"),
            id: "missing".to_string(),
        });
        assert!(result.is_err());
        assert_eq!(session.version(), 0);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_dispatch_add_item_generates_id() {
        let mut session = EditSession::new("client-1", document());
        let action = EditAction::AddItem { list: address("skills") };

        session.dispatch(&action, Node::Null).unwrap();
        session.dispatch(&action, Node::Null).unwrap();

        let ids: Vec<_> = session.document().list("skills").iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["s1", "skills-1", "skills-2"]);
    }

    #[test]
    fn test_dispatch_insert_bullet_and_move() {
        let mut session = EditSession::new("client-1", document());
        let bullets = address("experience.0.bulletPoints");

        session
            .dispatch(&EditAction::InsertValue { list: bullets, index: 0 }, Node::Null)
            .unwrap();
        assert_eq!(session.document().to_json()["experience"][0]["bulletPoints"], json!([""]));

        let bad = session.dispatch(
            &EditAction::MoveItem {
                list: address("skills"),
                id: "s1".to_string(),
            },
            Node::text("first"),
        );
        assert!(matches!(bad, Err(EditorError::InvalidPayload { action: "moveItem", .. })));
    }

    #[test]
    fn test_undo_redo_queue_pending() {
        let mut session = EditSession::new("client-1", document());
        session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("Ada King"),
            })
            .unwrap();

        assert!(session.undo().unwrap());
        assert_eq!(session.document().personal_info().text_field("fullName"), Some("Ada"));
        assert_eq!(session.pending_count(), 2);

        assert!(session.redo().unwrap());
        assert_eq!(session.document().personal_info().text_field("fullName"), Some("Ada King"));
        assert!(!session.redo().unwrap());
    }

    #[test]
    fn test_confirm_moves_base_forward() {
        let mut session = EditSession::new("client-1", document());
        let first = session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("A"),
            })
            .unwrap();
        session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("B"),
            })
            .unwrap();

        session.confirm(&first.id).unwrap();
        assert_eq!(session.pending_count(), 1);
        assert_eq!(session.base().personal_info().text_field("fullName"), Some("A"));

        session.confirm_all().unwrap();
        assert_eq!(session.base().to_json(), session.document().to_json());
        assert!(matches!(session.confirm("nope"), Err(EditorError::UnknownPending(_))));
    }

    #[test]
    fn test_failed_confirm_keeps_queue_and_base() {
        let mut session = EditSession::new("client-1", document());
        session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("A"),
            })
            .unwrap();
        // queued behind the valid edit but no longer applicable to base
        let stale = session.enqueue(Mutation::RemoveItem {
            list: address("skills"),
            id: "gone".to_string(),
        });

        assert!(matches!(session.confirm(&stale), Err(EditorError::Mutation(_))));
        assert_eq!(session.pending_count(), 2);
        assert_eq!(session.base().personal_info().text_field("fullName"), Some("Ada"));
    }

    #[test]
    fn test_reject_rebuilds_without_mutation() {
        let mut session = EditSession::new("client-1", document());
        let rename = session
            .apply(Mutation::SetField {
                address: address("personalInfo.fullName"),
                value: Node::text("Ada King"),
            })
            .unwrap();

        let outcome = session.reject(&rename.id).unwrap();
        assert_eq!(outcome.kept, 0);
        assert_eq!(session.document().personal_info().text_field("fullName"), Some("Ada"));
        assert!(!session.history().can_undo());
    }
}
