//! # Resume Documents
//!
//! A `Document` is a thin wrapper around a root `Node::Map`. It holds a
//! `personalInfo` record, named ordered lists (experience, skills, ...)
//! and an optional `settings` record.
//!
//! Documents arrive from outside (imports, uploads, saved drafts) and may
//! be missing any optional field. `Document::from_json` only insists that
//! the root is an object and that known lists are lists; everything else
//! is kept as-is.

use crate::error::DocumentError;
use crate::node::{Node, Record};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use tracing::debug;

/// Top-level lists whose record entries carry a stable `id`
pub const LIST_KEYS: [&str; 12] = [
    "experience",
    "education",
    "skills",
    "languages",
    "certifications",
    "projects",
    "awards",
    "achievements",
    "volunteer",
    "interests",
    "references",
    CUSTOM_SECTIONS,
];

pub const PERSONAL_INFO: &str = "personalInfo";
pub const CUSTOM_SECTIONS: &str = "customSections";
pub const SETTINGS: &str = "settings";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Default for Document {
    fn default() -> Self {
        let mut record = Record::new();
        record.insert(PERSONAL_INFO.to_string(), Node::empty_map());
        Self {
            root: Node::map(record),
        }
    }
}

impl Document {
    /// Wrap an already-normalised root. The root must be a record.
    pub fn from_root(root: Node) -> Result<Self, DocumentError> {
        match root {
            Node::Map(_) => Ok(Self { root }),
            other => Err(DocumentError::RootNotAnObject(other.kind())),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        Self::from_json(value)
    }

    /// Accept any JSON object as a document.
    ///
    /// Record entries of known lists that lack an `id` get a deterministic
    /// one (`<list>-<index>`, suffixed until unique). The same goes for the
    /// items of each custom section.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DocumentError> {
        let root = Node::from(value);
        let mut record = match root {
            Node::Map(record) => (*record).clone(),
            other => return Err(DocumentError::RootNotAnObject(other.kind())),
        };

        for key in LIST_KEYS {
            let Some(list) = record.get(key) else {
                continue;
            };
            let normalised = match list {
                Node::Null => continue,
                Node::List(items) => normalise_ids(key, items),
                other => {
                    return Err(DocumentError::UnexpectedShape {
                        key: key.to_string(),
                        expected: "list",
                        found: other.kind(),
                    })
                }
            };
            let normalised = if key == CUSTOM_SECTIONS {
                normalise_custom_items(&normalised)
            } else {
                normalised
            };
            record.insert(key.to_string(), normalised);
        }

        match record.get(PERSONAL_INFO) {
            None | Some(Node::Null) => {
                record.insert(PERSONAL_INFO.to_string(), Node::empty_map());
            }
            Some(Node::Map(_)) => {}
            Some(other) => {
                return Err(DocumentError::UnexpectedShape {
                    key: PERSONAL_INFO.to_string(),
                    expected: "record",
                    found: other.kind(),
                })
            }
        }

        Ok(Self {
            root: Node::map(record),
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Entries of a top-level list; empty when absent
    pub fn list(&self, key: &str) -> &[Node] {
        self.root
            .get(key)
            .and_then(Node::as_list)
            .unwrap_or(&[])
    }

    /// The personal-info record, or `Node::Null` when missing
    pub fn personal_info(&self) -> &Node {
        static NULL: Node = Node::Null;
        self.root.get(PERSONAL_INFO).unwrap_or(&NULL)
    }

    /// Position and entry of the custom section with `id`
    pub fn custom_section(&self, id: &str) -> Option<(usize, &Node)> {
        self.list(CUSTOM_SECTIONS)
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.id() == Some(id))
    }

    pub fn settings(&self) -> Option<&Node> {
        self.root.get(SETTINGS).filter(|n| n.as_map().is_some())
    }

    /// New document with one top-level entry replaced; all other entries are shared
    pub fn with_entry(&self, key: impl Into<String>, value: Node) -> Document {
        let mut record = self.root.as_map().cloned().unwrap_or_default();
        record.insert(key.into(), value);
        Document {
            root: Node::map(record),
        }
    }

    /// New document without a top-level entry
    pub fn without_entry(&self, key: &str) -> Document {
        let mut record = self.root.as_map().cloned().unwrap_or_default();
        record.remove(key);
        Document {
            root: Node::map(record),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(&self.root)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

fn normalise_ids(list: &str, items: &[Node]) -> Node {
    let mut taken: HashSet<String> = items.iter().filter_map(scalar_id).collect();

    let mut changed = false;
    let normalised = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Node::Map(record) = item else {
                return item.clone();
            };
            if item.id().is_some() {
                return item.clone();
            }

            let id = match scalar_id(item) {
                Some(id) => id,
                None => {
                    let id = unique_id(&format!("{}-{}", list, index), &mut taken);
                    debug!(list = list, index = index, id = %id, "Assigned missing item id");
                    id
                }
            };
            let mut record = (**record).clone();
            record.insert("id".to_string(), Node::from(id));
            changed = true;
            Node::map(record)
        })
        .collect::<Vec<_>>();

    if changed {
        Node::list(normalised)
    } else {
        Node::list(items.to_vec())
    }
}

/// Id of an entry as text; numeric ids from imports keep their value
fn scalar_id(item: &Node) -> Option<String> {
    match item.get("id")? {
        id @ (Node::Text(_) | Node::Number(_)) => id.display().filter(|id| !id.trim().is_empty()),
        _ => None,
    }
}

fn normalise_custom_items(sections: &Node) -> Node {
    let Some(sections) = sections.as_list() else {
        return sections.clone();
    };

    let updated = sections
        .iter()
        .map(|section| match (section, section.get("items")) {
            (Node::Map(record), Some(Node::List(items))) => {
                let prefix = format!("{}-items", section.id().unwrap_or("custom"));
                let mut record = (**record).clone();
                record.insert("items".to_string(), normalise_ids(&prefix, items));
                Node::map(record)
            }
            _ => section.clone(),
        })
        .collect();

    Node::list(updated)
}

fn unique_id(candidate: &str, taken: &mut HashSet<String>) -> String {
    let mut id = candidate.to_string();
    let mut suffix = 1;
    while taken.contains(&id) {
        id = format!("{}-{}", candidate, suffix);
        suffix += 1;
    }
    taken.insert(id.clone());
    id
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Document::from_json(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_ids_are_assigned_deterministically() {
        let doc = Document::from_json(json!({
            "skills": [{"name": "Go"}, {"id": "skills-0", "name": "Rust"}, {"name": "Zig"}]
        }))
        .unwrap();

        let ids: Vec<_> = doc.list("skills").iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["skills-0-1", "skills-0", "skills-2"]);
    }

    #[test]
    fn test_numeric_ids_become_text() {
        let doc = Document::from_json(json!({
            "skills": [{"id": 7, "name": "Go"}, {"id": "", "name": "Rust"}, {"id": null, "name": "Zig"}]
        }))
        .unwrap();

        let ids: Vec<_> = doc.list("skills").iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["7", "skills-1", "skills-2"]);
    }

    #[test]
    fn test_bare_entries_kept_verbatim() {
        let doc = Document::from_json(json!({"interests": ["chess", {"name": "Go"}]})).unwrap();
        let interests = doc.list("interests");
        assert_eq!(interests[0].as_str(), Some("chess"));
        assert_eq!(interests[1].id(), Some("interests-1"));
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            Document::from_json(json!([1])),
            Err(DocumentError::RootNotAnObject("list"))
        ));
    }

    #[test]
    fn test_known_list_with_wrong_shape_is_rejected() {
        let result = Document::from_json(json!({"skills": "Go, Rust"}));
        assert!(matches!(
            result,
            Err(DocumentError::UnexpectedShape { expected: "list", found: "text", .. })
        ));
    }

    #[test]
    fn test_missing_personal_info_becomes_empty_record() {
        let doc = Document::from_json(json!({})).unwrap();
        assert!(doc.personal_info().as_map().is_some());
        assert!(doc.list("experience").is_empty());
    }

    #[test]
    fn test_custom_section_items_get_ids() {
        let doc = Document::from_json(json!({
            "customSections": [{"id": "c1", "title": "Talks", "items": [{"title": "RustConf"}]}]
        }))
        .unwrap();
        let items = doc.list("customSections")[0]
            .get("items")
            .and_then(Node::as_list)
            .unwrap();
        assert_eq!(items[0].id(), Some("c1-items-0"));

        let (index, talks) = doc.custom_section("c1").unwrap();
        assert_eq!(index, 0);
        assert_eq!(talks.text_field("title"), Some("Talks"));
        assert!(doc.custom_section("c2").is_none());
    }
}
