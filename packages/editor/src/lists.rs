//! List operations on documents.
//!
//! Record lists (`experience`, `skills`, ...) are edited by item id.
//! Scalar lists (`bulletPoints`, `technologies`) have no ids and are
//! edited by index. A list that does not exist yet at a final record key
//! counts as empty.

use crate::resolver::{self, PathError};
use crate::MutationError;
use vitae_model::{Document, EditAddress, Node, Segment};

/// Current entries of the list at `list`
pub fn entries(document: &Document, list: &EditAddress) -> Result<Vec<Node>, MutationError> {
    match resolver::get(document, list) {
        Ok(Node::List(items)) => Ok(items.to_vec()),
        Ok(Node::Null) => Ok(Vec::new()),
        Ok(other) => Err(PathError::TypeMismatch {
            address: list.clone(),
            position: list.segments().len() - 1,
            expected: "list",
            found: other.kind(),
        }
        .into()),
        Err(PathError::Address { position, .. })
            if position + 1 == list.segments().len() && matches!(list.last(), Segment::Key(_)) =>
        {
            Ok(Vec::new())
        }
        Err(error) => Err(error.into()),
    }
}

fn write(document: &Document, list: &EditAddress, items: Vec<Node>) -> Result<Document, MutationError> {
    Ok(resolver::set(document, list, Node::list(items))?)
}

/// Id of a record item, or why it cannot be stored
pub fn item_id<'a>(list: &EditAddress, item: &'a Node) -> Result<&'a str, MutationError> {
    if item.as_map().is_none() {
        return Err(MutationError::InvalidItem {
            list: list.clone(),
            reason: "item must be a record",
        });
    }
    item.id().ok_or_else(|| MutationError::InvalidItem {
        list: list.clone(),
        reason: "item must carry a non-empty id",
    })
}

pub fn position_of(items: &[Node], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == Some(id))
}

fn check_new_item(list: &EditAddress, items: &[Node], item: &Node) -> Result<(), MutationError> {
    let id = item_id(list, item)?;
    if position_of(items, id).is_some() {
        return Err(MutationError::DuplicateId {
            list: list.clone(),
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Append `item`
pub fn add_item(document: &Document, list: &EditAddress, item: Node) -> Result<Document, MutationError> {
    let mut items = entries(document, list)?;
    check_new_item(list, &items, &item)?;
    items.push(item);
    write(document, list, items)
}

/// Insert `item` at `index` (`index == len` appends)
pub fn insert_item(document: &Document, list: &EditAddress, index: usize, item: Node) -> Result<Document, MutationError> {
    let mut items = entries(document, list)?;
    check_new_item(list, &items, &item)?;
    if index > items.len() {
        return Err(MutationError::IndexOutOfRange {
            list: list.clone(),
            index,
            len: items.len(),
        });
    }
    items.insert(index, item);
    write(document, list, items)
}

/// Drop the item with `id`; an absent id leaves the document as it was
pub fn remove_item(document: &Document, list: &EditAddress, id: &str) -> Result<Document, MutationError> {
    let items = entries(document, list)?;
    if position_of(&items, id).is_none() {
        return Ok(document.clone());
    }
    let kept = items.into_iter().filter(|item| item.id() != Some(id)).collect();
    write(document, list, kept)
}

/// Move the item with `from_id` to `to_index`, clamped to the last position
pub fn reorder(list: &[Node], from_id: &str, to_index: usize) -> Result<Vec<Node>, MutationError> {
    let from = position_of(list, from_id).ok_or_else(|| MutationError::ItemNotFound {
        list: None,
        id: from_id.to_string(),
    })?;

    let mut items = list.to_vec();
    let item = items.remove(from);
    let to = to_index.min(items.len());
    items.insert(to, item);
    Ok(items)
}

pub fn move_item(document: &Document, list: &EditAddress, id: &str, to_index: usize) -> Result<Document, MutationError> {
    let items = entries(document, list)?;
    let moved = reorder(&items, id, to_index).map_err(|error| error.in_list(list))?;
    write(document, list, moved)
}

/// Insert a scalar at `index` of an id-less list
pub fn insert_value(document: &Document, list: &EditAddress, index: usize, value: Node) -> Result<Document, MutationError> {
    let mut items = entries(document, list)?;
    if index > items.len() {
        return Err(MutationError::IndexOutOfRange {
            list: list.clone(),
            index,
            len: items.len(),
        });
    }
    items.insert(index, value);
    write(document, list, items)
}

pub fn remove_value(document: &Document, list: &EditAddress, index: usize) -> Result<Document, MutationError> {
    let mut items = entries(document, list)?;
    if index >= items.len() {
        return Err(MutationError::IndexOutOfRange {
            list: list.clone(),
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    write(document, list, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skills() -> EditAddress {
        EditAddress::key("skills")
    }

    fn document() -> Document {
        Document::from_json(json!({
            "personalInfo": {},
            "experience": [{"id": "e1", "title": "Eng"}],
            "skills": [{"id": "s1", "name": "Rust"}, {"id": "s2", "name": "Go"}, {"id": "s3", "name": "SQL"}]
        }))
        .unwrap()
    }

    fn ids(document: &Document) -> Vec<String> {
        document
            .list("skills")
            .iter()
            .filter_map(|n| n.id().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_add_then_remove_restores_content() {
        let doc = document();
        let added = add_item(&doc, &skills(), Node::from(json!({"id": "s9", "name": "Zig"}))).unwrap();
        assert_eq!(ids(&added), vec!["s1", "s2", "s3", "s9"]);

        let removed = remove_item(&added, &skills(), "s9").unwrap();
        assert_eq!(removed.to_json()["skills"], doc.to_json()["skills"]);
        assert!(Node::same(doc.get("experience").unwrap(), removed.get("experience").unwrap()));
    }

    #[test]
    fn test_add_rejects_duplicates_and_missing_ids() {
        let doc = document();
        assert!(matches!(
            add_item(&doc, &skills(), Node::from(json!({"id": "s1"}))),
            Err(MutationError::DuplicateId { .. })
        ));
        assert!(matches!(
            add_item(&doc, &skills(), Node::from(json!({"name": "x"}))),
            Err(MutationError::InvalidItem { .. })
        ));
        assert!(matches!(
            add_item(&doc, &skills(), Node::text("x")),
            Err(MutationError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_add_to_absent_list() {
        let doc = document();
        let updated = add_item(&doc, &EditAddress::key("awards"), Node::from(json!({"id": "a1"}))).unwrap();
        assert_eq!(updated.list("awards").len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let doc = document();
        let same = remove_item(&doc, &skills(), "nope").unwrap();
        assert!(Node::same(doc.root(), same.root()));
    }

    #[test]
    fn test_reorder_moves_only_position() {
        let doc = document();
        let moved = reorder(doc.list("skills"), "s1", 2).unwrap();
        let ids: Vec<_> = moved.iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["s2", "s3", "s1"]);
        assert!(Node::same(&moved[2], &doc.list("skills")[0]));
    }

    #[test]
    fn test_reorder_clamps_target() {
        let doc = document();
        let moved = reorder(doc.list("skills"), "s2", 99).unwrap();
        let ids: Vec<_> = moved.iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["s1", "s3", "s2"]);
    }

    #[test]
    fn test_reorder_unknown_id() {
        let doc = document();
        assert!(matches!(
            reorder(doc.list("skills"), "missing", 0),
            Err(MutationError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_scalar_values() {
        let doc = document();
        let bullets = EditAddress::parse("experience.0.bulletPoints").unwrap();

        let one = insert_value(&doc, &bullets, 0, Node::text("Shipped")).unwrap();
        let two = insert_value(&one, &bullets, 0, Node::text("Led")).unwrap();
        assert_eq!(two.to_json()["experience"][0]["bulletPoints"], json!(["Led", "Shipped"]));

        let back = remove_value(&two, &bullets, 0).unwrap();
        assert_eq!(back.to_json()["experience"][0]["bulletPoints"], json!(["Shipped"]));

        assert!(matches!(
            remove_value(&back, &bullets, 5),
            Err(MutationError::IndexOutOfRange { index: 5, len: 1, .. })
        ));
    }
}
