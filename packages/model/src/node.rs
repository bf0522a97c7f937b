//! # Document Values
//!
//! `Node` is the immutable value tree every resume document is made of.
//!
//! Containers (`List`, `Map`) sit behind an `Arc`. Cloning a node is
//! cheap and a copied container keeps sharing all children it did not
//! replace, which is what lets the editor produce new document versions
//! without deep copies and lets the pipeline detect unchanged subtrees
//! with a pointer comparison (`Node::same`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Record type used for `Node::Map`
pub type Record = BTreeMap<String, Node>;

#[derive(Debug, Clone, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(Arc<str>),
    List(Arc<Vec<Node>>),
    Map(Arc<Record>),
}

impl Node {
    pub fn text(value: impl AsRef<str>) -> Self {
        Node::Text(Arc::from(value.as_ref()))
    }

    pub fn list(items: Vec<Node>) -> Self {
        Node::List(Arc::new(items))
    }

    pub fn map(record: Record) -> Self {
        Node::Map(Arc::new(record))
    }

    pub fn empty_map() -> Self {
        Node::Map(Arc::new(Record::new()))
    }

    /// Short shape name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Number(_) => "number",
            Node::Text(_) => "text",
            Node::List(_) => "list",
            Node::Map(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            Node::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Record> {
        match self {
            Node::Map(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Field lookup on a record; `None` for other shapes
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|record| record.get(key))
    }

    /// Text field that is present and not blank
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Node::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Stable identity of a list entry
    pub fn id(&self) -> Option<&str> {
        self.text_field("id")
    }

    /// Reference identity for containers, value equality for scalars.
    ///
    /// Two documents that share a subtree return `true` here without
    /// walking it.
    pub fn same(a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::List(x), Node::List(y)) => Arc::ptr_eq(x, y),
            (Node::Map(x), Node::Map(y)) => Arc::ptr_eq(x, y),
            (Node::Text(x), Node::Text(y)) => Arc::ptr_eq(x, y) || x == y,
            _ => a == b,
        }
    }

    /// True when the node carries no renderable content
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Text(s) => s.trim().is_empty(),
            Node::List(items) => items.is_empty(),
            Node::Map(record) => record.is_empty(),
            Node::Bool(_) | Node::Number(_) => false,
        }
    }

    /// Display text for scalars (numbers without a trailing `.0`)
    pub fn display(&self) -> Option<String> {
        match self {
            Node::Text(s) => Some(s.to_string()),
            Node::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Node::Number(n) => Some(n.to_string()),
            Node::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::List(a), Node::List(b)) => Arc::ptr_eq(a, b) || a == b,
            (Node::Map(a), Node::Map(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(Arc::from(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value as f64)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::list(value)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Node::from(s),
            Value::Array(items) => Node::list(items.into_iter().map(Node::from).collect()),
            Value::Object(entries) => Node::map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Node> for serde_json::Value {
    fn from(node: &Node) -> Self {
        use serde_json::Value;
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.0e15 {
                    Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                }
            }
            Node::Text(s) => Value::String(s.to_string()),
            Node::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Map(record) => Value::Object(
                record
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Node::Number(n) => serializer.serialize_f64(*n),
            Node::Text(s) => serializer.serialize_str(s),
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (key, value) in record.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_conversion_keeps_shape() {
        let value = json!({"name": "Go", "level": 4, "tags": ["a", "b"], "x": null});
        let node = Node::from(value.clone());

        assert_eq!(node.get("name").and_then(Node::as_str), Some("Go"));
        assert_eq!(node.get("level").and_then(Node::as_f64), Some(4.0));
        assert_eq!(node.get("tags").and_then(Node::as_list).map(|l| l.len()), Some(2));
        assert_eq!(serde_json::Value::from(&node), value);
    }

    #[test]
    fn test_same_is_reference_identity_for_containers() {
        let a = Node::list(vec![Node::from("x")]);
        let b = a.clone();
        let c = Node::list(vec![Node::from("x")]);

        assert!(Node::same(&a, &b));
        assert!(!Node::same(&a, &c));
        assert_eq!(a, c);
    }

    #[test]
    fn test_text_field_skips_blank_values() {
        let node = Node::from(json!({"a": "  ", "b": "value"}));
        assert_eq!(node.text_field("a"), None);
        assert_eq!(node.text_field("b"), Some("value"));
        assert_eq!(node.text_field("missing"), None);
    }

    #[test]
    fn test_display_drops_integer_fraction() {
        assert_eq!(Node::from(3.0).display(), Some("3".to_string()));
        assert_eq!(Node::from(3.5).display(), Some("3.5".to_string()));
    }
}
