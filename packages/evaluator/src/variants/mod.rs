//! Built-in variant strategies, one module per section type.
//!
//! Each module exposes `DEFAULT` and `variants()`. Most variants of a
//! section type share one renderer parameterized by a small `Look` value.

pub mod awards;
pub mod certifications;
pub mod custom;
pub mod education;
pub mod experience;
pub mod header;
pub mod interests;
pub mod languages;
pub mod projects;
pub mod references;
pub mod skills;
pub mod summary;
pub mod volunteer;

use crate::render_node::{NodeRole, RenderNode};

/// Horizontal row, first child left and last child right
pub(crate) fn split_row(left: RenderNode, right: Option<RenderNode>) -> RenderNode {
    RenderNode::element("div", NodeRole::Row)
        .with_style("display", "flex")
        .with_style("justify-content", "space-between")
        .with_style("align-items", "baseline")
        .with_style("gap", "8px")
        .with_child(left)
        .with_opt_child(right)
}

/// Vertical stack of whatever children are present
pub(crate) fn stack(children: impl IntoIterator<Item = Option<RenderNode>>) -> RenderNode {
    RenderNode::element("div", NodeRole::Group)
        .with_style("display", "flex")
        .with_style("flex-direction", "column")
        .with_children(children.into_iter().flatten())
}

/// Present children on one line joined by `separator`
pub(crate) fn inline(children: impl IntoIterator<Item = Option<RenderNode>>, separator: &str) -> Option<RenderNode> {
    let present: Vec<RenderNode> = children.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }

    let mut row = RenderNode::element("span", NodeRole::Row);
    for (i, child) in present.into_iter().enumerate() {
        if i > 0 {
            row = row.with_child(RenderNode::text(separator));
        }
        row = row.with_child(child);
    }
    Some(row)
}

/// Flex-wrapped container of chips/badges
pub(crate) fn wrap(tag: &str, gap: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::element(tag, NodeRole::Items)
        .with_style("display", "flex")
        .with_style("flex-wrap", "wrap")
        .with_style("gap", gap.to_string())
        .with_children(children)
}

/// CSS grid with `columns` equal tracks
pub(crate) fn grid(columns: u8, gap: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::element("div", NodeRole::Items)
        .with_style("display", "grid")
        .with_style("grid-template-columns", format!("repeat({}, minmax(0, 1fr))", columns.max(1)))
        .with_style("gap", gap.to_string())
        .with_children(children)
}

pub(crate) fn empty_group() -> RenderNode {
    RenderNode::element("div", NodeRole::Group)
}
