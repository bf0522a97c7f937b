use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vitae_model::{EditAddress, TextRole};

/// Structural role of an element in the rendered resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeRole {
    Page,
    Header,
    Columns,
    Main,
    Sidebar,
    Section,
    Heading,
    Items,
    Item,
    Group,
    Row,
    Contact,
    Photo,
    Bullets,
    Bullet,
    Badge,
    Divider,
}

/// Edit hook attached to a rendered node in editable mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditAction {
    /// Replace the value at `address`
    SetField { address: EditAddress },
    /// Append a new record to `list`
    AddItem { list: EditAddress },
    RemoveItem { list: EditAddress, id: String },
    /// Move the record with `id` to a new position (payload: target index)
    MoveItem { list: EditAddress, id: String },
    /// Insert a scalar (bullet point, tag) at `index`
    InsertValue { list: EditAddress, index: usize },
    RemoveValue { list: EditAddress, index: usize },
}

impl EditAction {
    /// The field or list this action changes
    pub fn address(&self) -> &EditAddress {
        match self {
            EditAction::SetField { address } => address,
            EditAction::AddItem { list }
            | EditAction::RemoveItem { list, .. }
            | EditAction::MoveItem { list, .. }
            | EditAction::InsertValue { list, .. }
            | EditAction::RemoveValue { list, .. } => list,
        }
    }
}

/// Render tree node (style-resolved, role-tagged)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    Element {
        tag: String,
        role: NodeRole,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        attributes: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        styles: BTreeMap<String, String>,
        children: Vec<RenderNode>,
        /// Stable key for list items (the item id)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Leaf text bound to one document field
    Field {
        role: TextRole,
        content: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        styles: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        edit: Option<EditAction>,
    },

    /// Static text (separators, labels)
    Text { content: String },

    /// Rating shown as bars or dots
    Meter {
        value: f64,
        max: f64,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        styles: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        edit: Option<EditAction>,
    },

    /// Add/remove/move control shown in editable mode
    Affordance { action: EditAction, label: String },
}

impl RenderNode {
    pub fn element(tag: impl Into<String>, role: NodeRole) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            role,
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            RenderNode::Element { ref mut styles, .. }
            | RenderNode::Field { ref mut styles, .. }
            | RenderNode::Meter { ref mut styles, .. } => {
                styles.insert(key.into(), value.into());
            }
            _ => {}
        }
        self
    }

    pub fn with_styles(mut self, extra: BTreeMap<String, String>) -> Self {
        match self {
            RenderNode::Element { ref mut styles, .. }
            | RenderNode::Field { ref mut styles, .. }
            | RenderNode::Meter { ref mut styles, .. } => styles.extend(extra),
            _ => {}
        }
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = RenderNode>) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append a child only when present
    pub fn with_opt_child(self, child: Option<RenderNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn with_key(mut self, new_key: impl Into<String>) -> Self {
        if let RenderNode::Element { ref mut key, .. } = self {
            *key = Some(new_key.into());
        }
        self
    }

    pub fn with_href(mut self, link: impl Into<String>) -> Self {
        if let RenderNode::Field { ref mut href, .. } = self {
            *href = Some(link.into());
        }
        self
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn role(&self) -> Option<NodeRole> {
        match self {
            RenderNode::Element { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            RenderNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    /// Depth-first visit of this node and all descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// All field contents in document order, handy for assertions and plain-text export
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            RenderNode::Field { content, .. } | RenderNode::Text { content } => {
                if !content.is_empty() {
                    out.push(content.as_str())
                }
            }
            _ => {}
        });
        out
    }

    /// Every edit action reachable from this node
    pub fn edit_actions(&self) -> Vec<&EditAction> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            RenderNode::Field {
                edit: Some(action), ..
            }
            | RenderNode::Meter {
                edit: Some(action), ..
            } => out.push(action),
            RenderNode::Affordance { action, .. } => out.push(action),
            _ => {}
        });
        out
    }

    pub fn find_role(&self, role: NodeRole) -> Vec<&RenderNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if node.role() == Some(role) {
                out.push(node)
            }
        });
        out
    }
}

/// Complete render output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDocument {
    pub root: RenderNode,
    pub css_variables: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let node = RenderNode::element("section", NodeRole::Section)
            .with_attr("data-section", "skills")
            .with_style("gap", "8px")
            .with_key("skills")
            .with_child(RenderNode::text("Skills"))
            .with_opt_child(None);

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.key(), Some("skills"));
        assert_eq!(node.text_content(), vec!["Skills"]);
    }

    #[test]
    fn test_serialized_shape() {
        let node = RenderNode::Affordance {
            action: EditAction::RemoveItem {
                list: EditAddress::key("skills"),
                id: "s1".to_string(),
            },
            label: "Remove".to_string(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Affordance");
        assert_eq!(json["action"]["kind"], "removeItem");
        assert_eq!(json["action"]["list"], "skills");
    }
}
