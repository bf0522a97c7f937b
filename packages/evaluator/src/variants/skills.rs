//! Skills variants.
//!
//! `grouped` and `category-lines` are the only variants that reorder:
//! they bucket skills by category, buckets in order of first appearance,
//! skills inside a bucket in document order.

use super::{grid, inline, split_row, stack, wrap};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{EditAction, NodeRole, RenderNode};
use vitae_model::{Node, TextRole};

pub const DEFAULT: &str = "pills";

const MAX_LEVEL: f64 = 5.0;
const UNCATEGORIZED: &str = "Other";
const GROUPING_RULE: &str = "Groups by category in order of first appearance";

#[derive(Clone, Copy)]
enum Chip {
    Pill,
    Tag,
    Bordered,
    Accent,
}

#[derive(Clone, Copy)]
enum MeterStyle {
    Bar,
    Dots,
    Thin,
}

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("pills", "Rounded badges", |ctx| chips(ctx, Chip::Pill)),
        VariantInfo::new("tags", "Square-cornered tags", |ctx| chips(ctx, Chip::Tag)),
        VariantInfo::new("bordered-tags", "Outlined tags in the accent color", |ctx| chips(ctx, Chip::Bordered)),
        VariantInfo::new("pills-accent", "Solid accent badges", |ctx| chips(ctx, Chip::Accent)),
        VariantInfo::new("list", "Bulleted list", list),
        VariantInfo::new("inline", "One line joined by a separator", |ctx| joined(ctx, None)),
        VariantInfo::new("compact", "Comma separated small text", |ctx| joined(ctx, Some(", "))),
        VariantInfo::new("columns", "Names in a multi-column grid", columns),
        VariantInfo::new("bars", "Name with a proficiency bar", |ctx| rated(ctx, MeterStyle::Bar)),
        VariantInfo::new("dots", "Name with five proficiency dots", |ctx| rated(ctx, MeterStyle::Dots)),
        VariantInfo::new("modern", "Two-column grid with slim bars", modern),
        VariantInfo::new("detailed", "Name, category and rating per row", detailed),
        VariantInfo::new("grouped", "Badges grouped under category headings", grouped)
            .reorders(GROUPING_RULE),
        VariantInfo::new("category-lines", "One 'Category: a, b' line per category", category_lines)
            .reorders(GROUPING_RULE),
    ]
}

fn name(ctx: &SectionContext<'_>, index: usize, role: TextRole) -> Option<RenderNode> {
    ctx.item_field_any(index, &["name"], role)
}

fn chip(ctx: &SectionContext<'_>, index: usize, kind: Chip) -> RenderNode {
    let badge = &ctx.config.skills.badge;
    let accent = ctx.accent().to_string();
    let (background, border, text) = match kind {
        Chip::Pill => (
            badge.background_color.clone().unwrap_or_else(|| ctx.config.colors.background.accent.clone()),
            badge.border_color.clone().unwrap_or_else(|| ctx.config.colors.background.accent.clone()),
            badge.text_color.clone().unwrap_or_else(|| accent.clone()),
        ),
        Chip::Tag => (
            ctx.config.colors.background.section.clone(),
            ctx.config.colors.border.clone(),
            ctx.config.colors.text.secondary.clone(),
        ),
        Chip::Bordered => ("transparent".to_string(), accent.clone(), accent.clone()),
        Chip::Accent => (accent.clone(), accent, "#ffffff".to_string()),
    };
    let radius = match kind {
        Chip::Tag => "4px".to_string(),
        _ => badge.border_radius.clone(),
    };

    ctx.item(index, name(ctx, index, TextRole::Small).into_iter().collect())
        .with_style("font-size", badge.font_size.clone())
        .with_style("padding", badge.padding.clone())
        .with_style("border-radius", radius)
        .with_style("border", format!("{} solid {}", badge.border_width, border))
        .with_style("background", background)
        .with_style("color", text)
}

fn chips(ctx: &SectionContext<'_>, kind: Chip) -> RenderNode {
    let children: Vec<_> = ctx.indices().map(|i| chip(ctx, i, kind)).collect();
    wrap("div", &ctx.config.spacing.skill_gap, children).with_opt_child(ctx.add_control())
}

fn meter(ctx: &SectionContext<'_>, index: usize, style: MeterStyle) -> Option<RenderNode> {
    let level = ctx.items.get(index)?.get("level").and_then(Node::as_f64);
    if level.is_none() && !ctx.editable() {
        return None;
    }

    let edit = ctx
        .item_address(index)
        .and_then(|item| ctx.action(EditAction::SetField { address: item.field("level") }));
    let node = RenderNode::Meter {
        value: level.unwrap_or(0.0).clamp(0.0, MAX_LEVEL),
        max: MAX_LEVEL,
        styles: Default::default(),
        edit,
    }
    .with_style("color", ctx.accent().to_string());

    Some(match style {
        MeterStyle::Bar => node.with_style("height", "6px").with_style("--meter-shape", "bar"),
        MeterStyle::Dots => node.with_style("--meter-shape", "dots").with_style("gap", "3px"),
        MeterStyle::Thin => node.with_style("height", "3px").with_style("--meter-shape", "bar"),
    })
}

fn list(ctx: &SectionContext<'_>) -> RenderNode {
    let show_ratings = ctx.config.skills.show_ratings;
    let entries = ctx
        .indices()
        .map(|i| {
            let level = show_ratings
                .then(|| ctx.item_value(i, "level"))
                .flatten()
                .map(|l| RenderNode::text(format!("({}/5)", l)));
            let row = inline([name(ctx, i, TextRole::Body), level], " ");
            ctx.item_as("li", i, row.into_iter().collect())
        })
        .collect();
    ctx.items_container("ul", entries)
}

fn joined(ctx: &SectionContext<'_>, separator: Option<&str>) -> RenderNode {
    let configured = ctx.config.skills.separator.as_deref().unwrap_or(" • ");
    let separator = separator.unwrap_or(configured);
    let role = if separator == ", " { TextRole::Small } else { TextRole::Body };

    let mut line = RenderNode::element("p", NodeRole::Items);
    for i in ctx.indices() {
        if i > 0 {
            line = line.with_child(RenderNode::text(separator));
        }
        line = line.with_child(ctx.item(i, name(ctx, i, role).into_iter().collect()).with_style("display", "inline"));
    }
    line.with_opt_child(ctx.add_control())
}

fn columns(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| ctx.item(i, name(ctx, i, TextRole::Body).into_iter().collect()))
        .collect();
    grid(ctx.config.skills.columns, &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}

fn rated(ctx: &SectionContext<'_>, style: MeterStyle) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let row = split_row(
                name(ctx, i, TextRole::Body).unwrap_or_else(super::empty_group),
                meter(ctx, i, style),
            );
            ctx.item(i, vec![row])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn modern(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| ctx.item(i, vec![stack([name(ctx, i, TextRole::Small), meter(ctx, i, MeterStyle::Thin)])]))
        .collect();
    grid(2, &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}

fn detailed(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let label = stack([name(ctx, i, TextRole::ItemTitle), ctx.item_field(i, "category", TextRole::Small)]);
            ctx.item(i, vec![split_row(label, meter(ctx, i, MeterStyle::Dots))])
        })
        .collect();
    ctx.items_container("div", entries)
}

/// Categories in order of first appearance, each with its entry indices
pub fn group_by_category(items: &[Node]) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let category = item.text_field("category").map(str::trim).unwrap_or(UNCATEGORIZED);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(index),
            None => groups.push((category.to_string(), vec![index])),
        }
    }
    groups
}

fn grouped(ctx: &SectionContext<'_>) -> RenderNode {
    let groups = group_by_category(ctx.items).into_iter().map(|(category, members)| {
        let heading = RenderNode::element("h4", NodeRole::Heading)
            .with_styles(ctx.styles(TextRole::ItemTitle))
            .with_child(RenderNode::text(category.clone()));
        let chips = members.into_iter().map(|i| chip(ctx, i, Chip::Pill)).collect();
        RenderNode::element("div", NodeRole::Group)
            .with_key(category)
            .with_child(heading)
            .with_child(wrap("div", &ctx.config.spacing.skill_gap, chips))
    });
    ctx.items_container("div", groups.collect())
}

fn category_lines(ctx: &SectionContext<'_>) -> RenderNode {
    let lines = group_by_category(ctx.items).into_iter().map(|(category, members)| {
        let mut line = RenderNode::element("p", NodeRole::Group)
            .with_key(category.clone())
            .with_child(
                RenderNode::element("strong", NodeRole::Heading)
                    .with_styles(ctx.styles(TextRole::ItemTitle))
                    .with_child(RenderNode::text(format!("{}: ", category))),
            );
        for (n, i) in members.into_iter().enumerate() {
            if n > 0 {
                line = line.with_child(RenderNode::text(", "));
            }
            line = line.with_child(ctx.item(i, name(ctx, i, TextRole::Body).into_iter().collect()).with_style("display", "inline"));
        }
        line
    });
    ctx.items_container("div", lines.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_by_category_first_appearance() {
        let items: Vec<Node> = vec![
            Node::from(json!({"id": "1", "name": "Rust", "category": "Languages"})),
            Node::from(json!({"id": "2", "name": "Docker", "category": "Tools"})),
            Node::from(json!({"id": "3", "name": "Go", "category": "Languages"})),
            Node::from(json!({"id": "4", "name": "Focus"})),
        ];

        let groups = group_by_category(&items);
        assert_eq!(
            groups,
            vec![
                ("Languages".to_string(), vec![0, 2]),
                ("Tools".to_string(), vec![1]),
                ("Other".to_string(), vec![3]),
            ]
        );
    }
}
