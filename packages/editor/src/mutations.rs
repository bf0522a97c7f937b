//! # Document Mutations
//!
//! Semantic edit operations on resume documents.
//!
//! ## Design Principles
//!
//! 1. **Functional**: `apply` returns a new document and never partially applies
//! 2. **Validated**: `apply` runs `validate` first
//! 3. **Invertible**: `to_inverse` is computed against the document before the edit
//!
//! ## Mutation Semantics
//!
//! ### SetField
//! - Atomic replacement of one value, last write wins
//! - The inverse of filling a previously absent field is `RemoveField`
//!
//! ### RemoveField
//! - Drops a record key; a missing key is a no-op
//!
//! ### AddItem / InsertItem / RemoveItem / MoveItem
//! - Record lists, addressed by item id
//! - Removing an unknown id is rejected here (the lenient form lives in `lists`)
//!
//! ### InsertValue / RemoveValue
//! - Id-less scalar lists (bullet points, technologies), addressed by index

use crate::lists;
use crate::resolver::{self, PathError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitae_model::{Document, EditAddress, Node, Segment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Replace the value at `address`
    SetField { address: EditAddress, value: Node },

    /// Drop the record key `address` ends in
    RemoveField { address: EditAddress },

    /// Append a record carrying its own id
    AddItem { list: EditAddress, item: Node },

    InsertItem {
        list: EditAddress,
        index: usize,
        item: Node,
    },

    RemoveItem { list: EditAddress, id: String },

    MoveItem {
        list: EditAddress,
        id: String,
        #[serde(rename = "toIndex")]
        to_index: usize,
    },

    InsertValue {
        list: EditAddress,
        index: usize,
        value: Node,
    },

    RemoveValue { list: EditAddress, index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("No item with id '{id}'{}", in_list(.list))]
    ItemNotFound { list: Option<EditAddress>, id: String },

    #[error("Item id '{id}' already exists in '{list}'")]
    DuplicateId { list: EditAddress, id: String },

    #[error("Invalid item for '{list}': {reason}")]
    InvalidItem { list: EditAddress, reason: &'static str },

    #[error("Index {index} out of range for '{list}' (length {len})")]
    IndexOutOfRange {
        list: EditAddress,
        index: usize,
        len: usize,
    },
}

fn in_list(list: &Option<EditAddress>) -> String {
    list.as_ref().map(|l| format!(" in '{}'", l)).unwrap_or_default()
}

impl MutationError {
    /// Attach the list address to list-agnostic errors
    pub fn in_list(self, list: &EditAddress) -> Self {
        match self {
            MutationError::ItemNotFound { list: None, id } => MutationError::ItemNotFound {
                list: Some(list.clone()),
                id,
            },
            other => other,
        }
    }
}

impl Mutation {
    /// Field or list this mutation changes
    pub fn address(&self) -> &EditAddress {
        match self {
            Mutation::SetField { address, .. } | Mutation::RemoveField { address } => address,
            Mutation::AddItem { list, .. }
            | Mutation::InsertItem { list, .. }
            | Mutation::RemoveItem { list, .. }
            | Mutation::MoveItem { list, .. }
            | Mutation::InsertValue { list, .. }
            | Mutation::RemoveValue { list, .. } => list,
        }
    }

    /// Short name for logs and history descriptions
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::SetField { .. } => "setField",
            Mutation::RemoveField { .. } => "removeField",
            Mutation::AddItem { .. } => "addItem",
            Mutation::InsertItem { .. } => "insertItem",
            Mutation::RemoveItem { .. } => "removeItem",
            Mutation::MoveItem { .. } => "moveItem",
            Mutation::InsertValue { .. } => "insertValue",
            Mutation::RemoveValue { .. } => "removeValue",
        }
    }

    /// Check that the mutation applies to `document` without applying it
    pub fn validate(&self, document: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::SetField { address, .. } => validate_target(document, address),

            Mutation::RemoveField { address } => match address.last() {
                Segment::Key(_) => validate_target(document, address),
                Segment::Index(_) => Err(PathError::TypeMismatch {
                    address: address.clone(),
                    position: address.segments().len() - 1,
                    expected: "record",
                    found: "list",
                }
                .into()),
            },

            Mutation::AddItem { list, item } => {
                let items = lists::entries(document, list)?;
                validate_new_item(list, &items, item)
            }

            Mutation::InsertItem { list, index, item } => {
                let items = lists::entries(document, list)?;
                validate_new_item(list, &items, item)?;
                check_index(list, *index, items.len(), true)
            }

            Mutation::RemoveItem { list, id } | Mutation::MoveItem { list, id, .. } => {
                let items = lists::entries(document, list)?;
                match lists::position_of(&items, id) {
                    Some(_) => Ok(()),
                    None => Err(MutationError::ItemNotFound {
                        list: Some(list.clone()),
                        id: id.clone(),
                    }),
                }
            }

            Mutation::InsertValue { list, index, .. } => {
                let items = lists::entries(document, list)?;
                check_index(list, *index, items.len(), true)
            }

            Mutation::RemoveValue { list, index } => {
                let items = lists::entries(document, list)?;
                check_index(list, *index, items.len(), false)
            }
        }
    }

    /// Apply to `document`, returning the new version
    pub fn apply(&self, document: &Document) -> Result<Document, MutationError> {
        self.validate(document)?;

        match self {
            Mutation::SetField { address, value } => Ok(resolver::set(document, address, value.clone())?),
            Mutation::RemoveField { address } => Ok(resolver::remove(document, address)?),
            Mutation::AddItem { list, item } => lists::add_item(document, list, item.clone()),
            Mutation::InsertItem { list, index, item } => lists::insert_item(document, list, *index, item.clone()),
            Mutation::RemoveItem { list, id } => lists::remove_item(document, list, id),
            Mutation::MoveItem { list, id, to_index } => lists::move_item(document, list, id, *to_index),
            Mutation::InsertValue { list, index, value } => lists::insert_value(document, list, *index, value.clone()),
            Mutation::RemoveValue { list, index } => lists::remove_value(document, list, *index),
        }
    }

    /// Mutation that undoes this one, computed against the pre-edit document
    pub fn to_inverse(&self, document: &Document) -> Result<Mutation, MutationError> {
        self.validate(document)?;

        Ok(match self {
            Mutation::SetField { address, .. } | Mutation::RemoveField { address } => {
                match resolver::try_get(document, address) {
                    Some(value) => Mutation::SetField {
                        address: address.clone(),
                        value: value.clone(),
                    },
                    None => Mutation::RemoveField {
                        address: address.clone(),
                    },
                }
            }

            Mutation::AddItem { list, item } | Mutation::InsertItem { list, item, .. } => Mutation::RemoveItem {
                list: list.clone(),
                id: lists::item_id(list, item)?.to_string(),
            },

            Mutation::RemoveItem { list, id } => {
                let items = lists::entries(document, list)?;
                let index = position(list, &items, id)?;
                Mutation::InsertItem {
                    list: list.clone(),
                    index,
                    item: items[index].clone(),
                }
            }

            Mutation::MoveItem { list, id, .. } => {
                let items = lists::entries(document, list)?;
                Mutation::MoveItem {
                    list: list.clone(),
                    id: id.clone(),
                    to_index: position(list, &items, id)?,
                }
            }

            Mutation::InsertValue { list, index, .. } => Mutation::RemoveValue {
                list: list.clone(),
                index: *index,
            },

            Mutation::RemoveValue { list, index } => {
                let items = lists::entries(document, list)?;
                Mutation::InsertValue {
                    list: list.clone(),
                    index: *index,
                    value: items[*index].clone(),
                }
            }
        })
    }
}

fn position(list: &EditAddress, items: &[Node], id: &str) -> Result<usize, MutationError> {
    lists::position_of(items, id).ok_or_else(|| MutationError::ItemNotFound {
        list: Some(list.clone()),
        id: id.to_string(),
    })
}

fn validate_new_item(list: &EditAddress, items: &[Node], item: &Node) -> Result<(), MutationError> {
    let id = lists::item_id(list, item)?;
    if lists::position_of(items, id).is_some() {
        return Err(MutationError::DuplicateId {
            list: list.clone(),
            id: id.to_string(),
        });
    }
    Ok(())
}

/// `index` must address an entry, or the end of the list when `allow_end` is set
fn check_index(list: &EditAddress, index: usize, len: usize, allow_end: bool) -> Result<(), MutationError> {
    if index < len || (allow_end && index == len) {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange {
            list: list.clone(),
            index,
            len,
        })
    }
}

/// The container of `address` must exist and have the right shape
fn validate_target(document: &Document, address: &EditAddress) -> Result<(), MutationError> {
    let Some(parent) = address.parent() else {
        return Ok(());
    };
    let position = parent.segments().len();
    let container = resolver::get(document, &parent)?;

    match (address.last(), container) {
        (Segment::Key(_), Node::Map(_)) => Ok(()),
        (Segment::Index(index), Node::List(items)) if *index < items.len() => Ok(()),
        (Segment::Index(_), Node::List(_)) => Err(PathError::Address {
            address: address.clone(),
            position,
            reason: "index out of range",
        }
        .into()),
        (_, Node::Null) => Err(PathError::Address {
            address: address.clone(),
            position,
            reason: "parent is null",
        }
        .into()),
        (segment, other) => Err(PathError::TypeMismatch {
            address: address.clone(),
            position,
            expected: match segment {
                Segment::Key(_) => "record",
                Segment::Index(_) => "list",
            },
            found: other.kind(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address(raw: &str) -> EditAddress {
        EditAddress::parse(raw).unwrap()
    }

    fn document() -> Document {
        Document::from_json(json!({
            "personalInfo": {"fullName": "Ada"},
            "experience": [{"id": "e1", "title": "Eng", "bulletPoints": ["a"]}],
            "skills": [{"id": "s1", "name": "Rust"}, {"id": "s2", "name": "Go"}]
        }))
        .unwrap()
    }

    fn undo_round_trip(mutation: Mutation) {
        let doc = document();
        let inverse = mutation.to_inverse(&doc).unwrap();
        let applied = mutation.apply(&doc).unwrap();
        let restored = inverse.apply(&applied).unwrap();
        assert_eq!(restored.to_json(), doc.to_json(), "inverse of {:?}", mutation);
    }

    #[test]
    fn test_inverses_restore_content() {
        undo_round_trip(Mutation::SetField {
            address: address("experience.0.title"),
            value: Node::text("Lead"),
        });
        undo_round_trip(Mutation::AddItem {
            list: address("skills"),
            item: Node::from(json!({"id": "s9", "name": "Zig"})),
        });
        undo_round_trip(Mutation::InsertItem {
            list: address("skills"),
            index: 0,
            item: Node::from(json!({"id": "s0", "name": "C"})),
        });
        undo_round_trip(Mutation::RemoveItem {
            list: address("skills"),
            id: "s1".to_string(),
        });
        undo_round_trip(Mutation::MoveItem {
            list: address("skills"),
            id: "s1".to_string(),
            to_index: 1,
        });
        undo_round_trip(Mutation::InsertValue {
            list: address("experience.0.bulletPoints"),
            index: 1,
            value: Node::text("b"),
        });
        undo_round_trip(Mutation::RemoveValue {
            list: address("experience.0.bulletPoints"),
            index: 0,
        });
    }

    #[test]
    fn test_inverse_of_new_field_removes_it() {
        let doc = document();
        let mutation = Mutation::SetField {
            address: address("personalInfo.phone"),
            value: Node::text("555"),
        };
        let inverse = mutation.to_inverse(&doc).unwrap();
        assert_eq!(
            inverse,
            Mutation::RemoveField {
                address: address("personalInfo.phone"),
            }
        );

        let restored = inverse.apply(&mutation.apply(&doc).unwrap()).unwrap();
        assert_eq!(restored.to_json(), doc.to_json());
        assert!(restored.personal_info().get("phone").is_none());
    }

    #[test]
    fn test_remove_field_round_trip() {
        undo_round_trip(Mutation::RemoveField {
            address: address("personalInfo.fullName"),
        });

        let by_index = Mutation::RemoveField {
            address: address("experience.0.bulletPoints.0"),
        };
        assert!(matches!(
            by_index.validate(&document()),
            Err(MutationError::Path(PathError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_remove_unknown_item_rejected() {
        let mutation = Mutation::RemoveItem {
            list: address("skills"),
            id: "nope".to_string(),
        };
        assert!(matches!(
            mutation.apply(&document()),
            Err(MutationError::ItemNotFound { list: Some(_), .. })
        ));
    }

    #[test]
    fn test_set_field_validation() {
        let doc = document();
        let bad_index = Mutation::SetField {
            address: address("experience.4.title"),
            value: Node::text("x"),
        };
        assert!(matches!(bad_index.validate(&doc), Err(MutationError::Path(PathError::Address { .. }))));

        let bad_shape = Mutation::SetField {
            address: address("skills.name"),
            value: Node::text("x"),
        };
        assert!(matches!(
            bad_shape.validate(&doc),
            Err(MutationError::Path(PathError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_serde_shape() {
        let mutation = Mutation::MoveItem {
            list: address("skills"),
            id: "s1".to_string(),
            to_index: 0,
        };
        let value = serde_json::to_value(&mutation).unwrap();
        assert_eq!(value, json!({"type": "moveItem", "list": "skills", "id": "s1", "toIndex": 0}));

        let back: Mutation = serde_json::from_value(value).unwrap();
        assert_eq!(back, mutation);
    }
}
