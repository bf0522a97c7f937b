//! # Path Resolver
//!
//! Reads and writes single values by `EditAddress`.
//!
//! `set` never touches its input. It copies each container on the path
//! from the root to the target and shares every other subtree with the
//! previous version, so an unrelated list keeps its identity
//! (`Node::same`) across edits.
//!
//! `set` only targets existing structure: every index must exist and
//! every intermediate key must hold a container. The final key of a
//! record may be new, which is how optional fields get filled in.
//! `remove` is its counterpart for clearing such a field again.

use thiserror::Error;
use vitae_model::{Document, EditAddress, Node, Segment};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Nothing at '{address}' (segment {position}): {reason}")]
    Address {
        address: EditAddress,
        position: usize,
        reason: &'static str,
    },

    #[error("Type mismatch at '{address}' (segment {position}): expected {expected}, found {found}")]
    TypeMismatch {
        address: EditAddress,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl PathError {
    /// Segment position the error refers to
    pub fn position(&self) -> usize {
        match self {
            PathError::Address { position, .. } | PathError::TypeMismatch { position, .. } => *position,
        }
    }
}

fn missing(address: &EditAddress, position: usize, reason: &'static str) -> PathError {
    PathError::Address {
        address: address.clone(),
        position,
        reason,
    }
}

fn mismatch(address: &EditAddress, position: usize, segment: &Segment, found: &Node) -> PathError {
    PathError::TypeMismatch {
        address: address.clone(),
        position,
        expected: match segment {
            Segment::Key(_) => "record",
            Segment::Index(_) => "list",
        },
        found: found.kind(),
    }
}

/// Value at `address`
pub fn get<'a>(document: &'a Document, address: &EditAddress) -> Result<&'a Node, PathError> {
    let mut current = document.root();

    for (position, segment) in address.segments().iter().enumerate() {
        current = match (segment, current) {
            (Segment::Key(key), Node::Map(record)) => record
                .get(key)
                .ok_or_else(|| missing(address, position, "no such key"))?,
            (Segment::Index(index), Node::List(items)) => items
                .get(*index)
                .ok_or_else(|| missing(address, position, "index out of range"))?,
            (_, Node::Null) => return Err(missing(address, position, "parent is null")),
            (segment, other) => return Err(mismatch(address, position, segment, other)),
        };
    }

    Ok(current)
}

/// Value at `address`, `None` on any path error
pub fn try_get<'a>(document: &'a Document, address: &EditAddress) -> Option<&'a Node> {
    get(document, address).ok()
}

/// New document with `value` at `address`
pub fn set(document: &Document, address: &EditAddress, value: Node) -> Result<Document, PathError> {
    let segments = address.segments();
    let (first, rest) = match segments.split_first() {
        Some((Segment::Key(key), rest)) => (key, rest),
        Some((segment, _)) => return Err(mismatch(address, 0, segment, document.root())),
        None => return Err(missing(address, 0, "empty address")),
    };

    let updated = if rest.is_empty() {
        value
    } else {
        match document.get(first) {
            Some(child) => set_in(child, rest, 1, address, value)?,
            None => return Err(missing(address, 0, "no such key")),
        }
    };

    Ok(document.with_entry(first.clone(), updated))
}

/// New document without the record key `address` ends in.
///
/// Removing a key that is not there returns the document unchanged.
pub fn remove(document: &Document, address: &EditAddress) -> Result<Document, PathError> {
    let position = address.segments().len() - 1;
    let key = match address.last() {
        Segment::Key(key) => key,
        Segment::Index(_) => {
            return Err(PathError::TypeMismatch {
                address: address.clone(),
                position,
                expected: "record",
                found: "list",
            })
        }
    };

    let Some(parent) = address.parent() else {
        return Ok(document.without_entry(key));
    };
    let record = match get(document, &parent)? {
        Node::Map(record) => record,
        Node::Null => return Err(missing(address, position, "parent is null")),
        other => return Err(mismatch(address, position, address.last(), other)),
    };
    if !record.contains_key(key) {
        return Ok(document.clone());
    }

    let mut record = (**record).clone();
    record.remove(key);
    set(document, &parent, Node::map(record))
}

fn set_in(
    node: &Node,
    segments: &[Segment],
    position: usize,
    address: &EditAddress,
    value: Node,
) -> Result<Node, PathError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(value);
    };

    match (segment, node) {
        (Segment::Key(key), Node::Map(record)) => {
            let updated = if rest.is_empty() {
                value
            } else {
                match record.get(key) {
                    Some(child) => set_in(child, rest, position + 1, address, value)?,
                    None => return Err(missing(address, position, "no such key")),
                }
            };
            let mut record = (**record).clone();
            record.insert(key.clone(), updated);
            Ok(Node::map(record))
        }
        (Segment::Index(index), Node::List(items)) => {
            let child = items
                .get(*index)
                .ok_or_else(|| missing(address, position, "index out of range"))?;
            let updated = set_in(child, rest, position + 1, address, value)?;
            let mut items = (**items).clone();
            items[*index] = updated;
            Ok(Node::list(items))
        }
        (_, Node::Null) => Err(missing(address, position, "parent is null")),
        (segment, other) => Err(mismatch(address, position, segment, other)),
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
            "experience": [{"id": "e1", "title": "Eng", "bulletPoints": ["a", "b"]}],
            "skills": [{"id": "s1", "name": "Rust"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_remove_field() {
        let doc = document();
        let updated = remove(&doc, &address("personalInfo.fullName")).unwrap();

        assert_eq!(updated.to_json()["personalInfo"], json!({}));
        assert!(Node::same(doc.get("skills").unwrap(), updated.get("skills").unwrap()));

        let unchanged = remove(&doc, &address("personalInfo.phone")).unwrap();
        assert_eq!(unchanged.to_json(), doc.to_json());

        assert!(matches!(
            remove(&doc, &address("experience.0.bulletPoints.0")),
            Err(PathError::TypeMismatch { expected: "record", .. })
        ));
    }

    #[test]
    fn test_get_nested() {
        let doc = document();
        assert_eq!(
            get(&doc, &address("experience.0.bulletPoints.1")).unwrap(),
            &Node::text("b")
        );
        assert_eq!(get(&doc, &address("personalInfo.fullName")).unwrap(), &Node::text("Ada"));
    }

    #[test]
    fn test_set_copies_path_and_shares_siblings() {
        let doc = document();
        let updated = set(&doc, &address("experience.0.title"), Node::text("Senior Eng")).unwrap();

        assert_eq!(
            updated.to_json()["experience"],
            json!([{"id": "e1", "title": "Senior Eng", "bulletPoints": ["a", "b"]}])
        );
        assert!(Node::same(doc.get("skills").unwrap(), updated.get("skills").unwrap()));
        assert!(Node::same(
            get(&doc, &address("experience.0.bulletPoints")).unwrap(),
            get(&updated, &address("experience.0.bulletPoints")).unwrap()
        ));
        // input untouched
        assert_eq!(get(&doc, &address("experience.0.title")).unwrap(), &Node::text("Eng"));
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let doc = document();
        let target = address("experience.0.bulletPoints.0");
        let updated = set(&doc, &target, Node::text("rewritten")).unwrap();
        assert_eq!(get(&updated, &target).unwrap(), &Node::text("rewritten"));
    }

    #[test]
    fn test_set_new_final_key() {
        let doc = document();
        let updated = set(&doc, &address("experience.0.location"), Node::text("Remote")).unwrap();
        assert_eq!(updated.to_json()["experience"][0]["location"], json!("Remote"));
    }

    #[test]
    fn test_missing_index_is_address_error() {
        let doc = document();
        let err = set(&doc, &address("experience.3.title"), Node::text("x")).unwrap_err();
        assert!(matches!(err, PathError::Address { position: 1, .. }));
    }

    #[test]
    fn test_missing_intermediate_is_address_error() {
        let doc = document();
        let err = set(&doc, &address("personalInfo.address.city"), Node::text("x")).unwrap_err();
        assert!(matches!(err, PathError::Address { position: 1, .. }));
    }

    #[test]
    fn test_shape_conflicts_are_type_mismatches() {
        let doc = document();
        let err = set(&doc, &address("experience.title"), Node::text("x")).unwrap_err();
        assert!(matches!(
            err,
            PathError::TypeMismatch { position: 1, expected: "record", found: "list", .. }
        ));

        let err = get(&doc, &address("personalInfo.fullName.0")).unwrap_err();
        assert!(matches!(err, PathError::TypeMismatch { expected: "list", found: "text", .. }));
    }
}
