//! Per-section render context and the node builders every variant shares.
//!
//! Strategies never build `Field` nodes by hand. They go through the
//! builders here, which apply the display/editable rules in one place:
//!
//! - display mode omits empty optional fields and turns links into hrefs
//! - editable mode keeps empty fields with a placeholder and attaches an
//!   `EditAction` (subject to the host's `EditHooks`)

use crate::date::{format_date_with, format_range};
use crate::hooks::EditHooks;
use crate::render_node::{EditAction, NodeRole, RenderNode};
use crate::style::{resolve_style, ResolvedStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vitae_model::{
    Document, EditAddress, Node, SectionDescriptor, SectionType, StyleOptions, TemplateConfig,
    TextRole, PERSONAL_INFO,
};

pub const PLACEHOLDER: &str = "Click to edit";

/// Keys that stand for the whole entry when a list holds bare text
const PRIMARY_KEYS: [&str; 4] = ["name", "language", "title", "position"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Display,
    Editable,
}

pub struct SectionContext<'a> {
    pub kind: SectionType,
    pub descriptor: &'a SectionDescriptor,
    pub config: &'a TemplateConfig,
    pub options: &'a StyleOptions,
    pub mode: RenderMode,
    pub hooks: &'a dyn EditHooks,
    pub document: &'a Document,
    /// Entries of the section's list (empty for header and summary)
    pub items: &'a [Node],
    /// Address of that list
    pub list: Option<EditAddress>,
}

impl<'a> SectionContext<'a> {
    pub fn editable(&self) -> bool {
        self.mode == RenderMode::Editable
    }

    pub fn style(&self, role: TextRole) -> ResolvedStyle {
        resolve_style(role, self.config, self.descriptor.styles.get(&role), self.options)
    }

    pub fn styles(&self, role: TextRole) -> BTreeMap<String, String> {
        self.style(role).to_styles()
    }

    pub fn accent(&self) -> &str {
        &self.config.colors.primary
    }

    pub fn personal(&self) -> &'a Node {
        self.document.personal_info()
    }

    pub fn personal_address(&self, key: &str) -> EditAddress {
        EditAddress::key(PERSONAL_INFO).field(key)
    }

    /// Document setting flag, defaulting to `true` when unset
    pub fn setting_enabled(&self, key: &str) -> bool {
        self.document
            .settings()
            .and_then(|s| s.get(key))
            .and_then(Node::as_bool)
            .unwrap_or(true)
    }

    /// Edit action if the mode and the host's hooks allow it
    pub fn action(&self, action: EditAction) -> Option<EditAction> {
        if self.editable() && self.hooks.allow(&action) {
            Some(action)
        } else {
            None
        }
    }

    pub fn item_address(&self, index: usize) -> Option<EditAddress> {
        self.list.as_ref().map(|list| list.index(index))
    }

    /// Leaf field bound to `address`.
    ///
    /// `None` in display mode when the value is blank.
    pub fn field(&self, role: TextRole, address: EditAddress, value: Option<&str>) -> Option<RenderNode> {
        self.field_with(role, address, value, PLACEHOLDER)
    }

    pub fn field_with(
        &self,
        role: TextRole,
        address: EditAddress,
        value: Option<&str>,
        placeholder: &str,
    ) -> Option<RenderNode> {
        let content = value.map(str::trim).unwrap_or_default();
        if content.is_empty() && !self.editable() {
            return None;
        }

        Some(RenderNode::Field {
            role,
            content: content.to_string(),
            styles: self.styles(role),
            href: None,
            placeholder: (content.is_empty() && self.editable()).then(|| placeholder.to_string()),
            edit: self.action(EditAction::SetField { address }),
        })
    }

    /// Field that links out in display mode
    pub fn link(&self, role: TextRole, address: EditAddress, value: Option<&str>, href: fn(&str) -> String) -> Option<RenderNode> {
        let node = self.field(role, address, value)?;
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) if !self.editable() => Some(node.with_href(href(v))),
            _ => Some(node),
        }
    }

    pub fn personal_field(&self, role: TextRole, key: &str) -> Option<RenderNode> {
        let value = self.personal().get(key).and_then(Node::display);
        self.field(role, self.personal_address(key), value.as_deref())
    }

    /// Field read from the list entry at `index`.
    ///
    /// Bare text entries (`"Chess"` in an interests list) are addressed as
    /// a whole.
    pub fn item_field(&self, index: usize, key: &str, role: TextRole) -> Option<RenderNode> {
        self.item_field_any(index, &[key], role)
    }

    /// First present field among `keys` (`position` or `title`, ...)
    pub fn item_field_any(&self, index: usize, keys: &[&str], role: TextRole) -> Option<RenderNode> {
        let item = self.items.get(index)?;
        let base = self.item_address(index)?;

        if let Node::Text(text) = item {
            let primary = keys.iter().any(|k| PRIMARY_KEYS.contains(k));
            return if primary {
                self.field(role, base, Some(text.as_ref()))
            } else {
                None
            };
        }

        let found = keys.iter().find_map(|key| {
            item.get(key)
                .and_then(Node::display)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (*key, v))
        });
        match found {
            Some((key, value)) => self.field(role, base.field(key), Some(&value)),
            None => self.field(role, base.field(keys.first().copied().unwrap_or("name")), None),
        }
    }

    /// Raw display value of a field on the entry at `index`
    pub fn item_value(&self, index: usize, key: &str) -> Option<String> {
        let item = self.items.get(index)?;
        match item {
            Node::Text(text) if PRIMARY_KEYS.contains(&key) => Some(text.to_string()),
            _ => item.get(key).and_then(Node::display).filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn item_link(&self, index: usize, key: &str, role: TextRole) -> Option<RenderNode> {
        let value = self.item_value(index, key);
        let address = self.item_address(index)?.field(key);
        self.link(role, address, value.as_deref(), web_href)
    }

    /// Date range of the entry at `index` in the active date format.
    ///
    /// Display mode renders one formatted field. Editable mode renders
    /// start and end as separate fields so each can be edited.
    pub fn dates(&self, index: usize) -> Option<RenderNode> {
        let item = self.items.get(index)?;
        let base = self.item_address(index)?;
        let format = self.options.date_format();
        let start = item.get("startDate").and_then(Node::as_str);
        let end = item.get("endDate").and_then(Node::as_str);
        let current = is_current(item);

        if !self.editable() {
            let range = format_range(start, end, current, format);
            return self.field(TextRole::Dates, base.field("startDate"), Some(&range));
        }

        let start_text = start.map(|s| format_date_with(s, format)).unwrap_or_default();
        let end_text = if current {
            crate::date::PRESENT.to_string()
        } else {
            end.map(|e| format_date_with(e, format)).unwrap_or_default()
        };

        Some(
            RenderNode::element("span", NodeRole::Row)
                .with_opt_child(self.field_with(TextRole::Dates, base.field("startDate"), Some(&start_text), "Start"))
                .with_child(RenderNode::text(crate::date::RANGE_SEPARATOR))
                .with_opt_child(self.field_with(TextRole::Dates, base.field("endDate"), Some(&end_text), "End")),
        )
    }

    /// Single formatted date field (`date` on certifications, awards, ...)
    pub fn date_field(&self, index: usize, key: &str) -> Option<RenderNode> {
        let raw = self.item_value(index, key);
        let formatted = raw
            .as_deref()
            .map(|r| format_date_with(r, self.options.date_format()));
        let address = self.item_address(index)?.field(key);
        self.field(TextRole::Dates, address, formatted.as_deref())
    }

    /// Scalar sub-list of an entry (bullet points, technologies).
    ///
    /// Editable mode adds per-value remove controls and a trailing insert.
    pub fn values(&self, index: usize, key: &str, container: NodeRole, tag: &str) -> Option<RenderNode> {
        let item = self.items.get(index)?;
        let list = self.item_address(index)?.field(key);
        let values = item.get(key).and_then(Node::as_list).unwrap_or(&[]);
        let (item_tag, item_role, role) = match container {
            NodeRole::Bullets => ("li", NodeRole::Bullet, TextRole::Body),
            _ => ("span", NodeRole::Badge, TextRole::Small),
        };

        let mut children = Vec::new();
        for (i, value) in values.iter().enumerate() {
            let text = value.display();
            let Some(field) = self.field(role, list.index(i), text.as_deref()) else {
                continue;
            };
            let mut entry = RenderNode::element(item_tag, item_role).with_child(field);
            if let Some(action) = self.action(EditAction::RemoveValue {
                list: list.clone(),
                index: i,
            }) {
                entry = entry.with_child(affordance(action, "Remove"));
            }
            children.push(entry);
        }

        let insert = self.action(EditAction::InsertValue {
            list: list.clone(),
            index: values.len(),
        });
        if children.is_empty() && insert.is_none() {
            return None;
        }

        let mut node = RenderNode::element(tag, container)
            .with_style("gap", self.config.spacing.bullet_gap.clone())
            .with_children(children);
        if let Some(action) = insert {
            node = node.with_child(affordance(action, if container == NodeRole::Bullets { "Add bullet" } else { "Add" }));
        }
        Some(node)
    }

    pub fn bullets(&self, index: usize) -> Option<RenderNode> {
        self.values(index, "bulletPoints", NodeRole::Bullets, "ul")
            .map(|node| node.with_attr("data-bullet", self.config.experience.bullet_style.clone()))
    }

    /// Wrapper for one list entry, keyed by its id
    pub fn item(&self, index: usize, children: Vec<RenderNode>) -> RenderNode {
        self.item_as("div", index, children)
    }

    pub fn item_as(&self, tag: &str, index: usize, children: Vec<RenderNode>) -> RenderNode {
        let item = self.items.get(index);
        let key = item
            .and_then(Node::id)
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string());

        let mut node = RenderNode::element(tag, NodeRole::Item)
            .with_key(key)
            .with_children(children);

        if let (Some(list), Some(id)) = (&self.list, item.and_then(Node::id)) {
            for (action, label) in [
                (EditAction::MoveItem { list: list.clone(), id: id.to_string() }, "Move"),
                (EditAction::RemoveItem { list: list.clone(), id: id.to_string() }, "Remove"),
            ] {
                if let Some(action) = self.action(action) {
                    node = node.with_child(affordance(action, label));
                }
            }
        } else if let (Some(list), Some(Node::Text(_))) = (&self.list, item) {
            let action = EditAction::RemoveValue {
                list: list.clone(),
                index,
            };
            node = node.with_opt_child(self.action(action).map(|a| affordance(a, "Remove")));
        }
        node
    }

    /// Container for all entries, plus the add control in editable mode
    pub fn items_container(&self, tag: &str, children: Vec<RenderNode>) -> RenderNode {
        let node = RenderNode::element(tag, NodeRole::Items)
            .with_style("display", "flex")
            .with_style("flex-direction", "column")
            .with_style("gap", self.config.spacing.item_gap.clone())
            .with_children(children);
        node.with_opt_child(self.add_control())
    }

    /// "Add" control for the section's list, editable mode only
    pub fn add_control(&self) -> Option<RenderNode> {
        let list = self.list.clone()?;
        self.action(EditAction::AddItem { list })
            .map(|action| affordance(action, "Add"))
    }

    /// Indices of the entries to render, in document order
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.items.len()
    }
}

pub fn affordance(action: EditAction, label: &str) -> RenderNode {
    RenderNode::Affordance {
        action,
        label: label.to_string(),
    }
}

pub fn is_current(item: &Node) -> bool {
    match item.get("current") {
        Some(Node::Bool(b)) => *b,
        Some(Node::Text(t)) => t.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// `https://` prefix for bare domains
pub fn web_href(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

pub fn mail_href(value: &str) -> String {
    format!("mailto:{}", value)
}

pub fn tel_href(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

/// Up to two initials from a full name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_helpers() {
        assert_eq!(web_href("github.com/ada"), "https://github.com/ada");
        assert_eq!(web_href("http://x.dev"), "http://x.dev");
        assert_eq!(mail_href("a@b.c"), "mailto:a@b.c");
        assert_eq!(tel_href("+1 (555) 010-2000"), "tel:+15550102000");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada king lovelace"), "AK");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_is_current() {
        assert!(is_current(&Node::from(serde_json::json!({"current": true}))));
        assert!(is_current(&Node::from(serde_json::json!({"current": "TRUE"}))));
        assert!(!is_current(&Node::from(serde_json::json!({}))));
    }
}
