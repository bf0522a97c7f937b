//! Interests accept both records (`{"name": "Chess"}`) and bare strings.

use super::{grid, stack, wrap};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Name with optional description", standard),
        VariantInfo::new("grid", "Three-column grid", grid_view),
        VariantInfo::new("inline", "One line joined by bullets", inline_view),
        VariantInfo::new("list", "Bulleted list", list),
        VariantInfo::new("pills", "Rounded badges", pills),
    ]
}

fn name(ctx: &SectionContext<'_>, index: usize, role: TextRole) -> Option<RenderNode> {
    ctx.item_field_any(index, &["name"], role)
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([name(ctx, i, TextRole::ItemTitle), ctx.item_field(i, "description", TextRole::Small)]);
            ctx.item(i, vec![body])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn grid_view(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| ctx.item(i, name(ctx, i, TextRole::Body).into_iter().collect()))
        .collect();
    grid(3, &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}

fn inline_view(ctx: &SectionContext<'_>) -> RenderNode {
    let mut line = RenderNode::element("p", NodeRole::Items);
    for i in ctx.indices() {
        if i > 0 {
            line = line.with_child(RenderNode::text(" • "));
        }
        line = line.with_child(ctx.item(i, name(ctx, i, TextRole::Body).into_iter().collect()).with_style("display", "inline"));
    }
    line.with_opt_child(ctx.add_control())
}

fn list(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| ctx.item_as("li", i, name(ctx, i, TextRole::Body).into_iter().collect()))
        .collect();
    ctx.items_container("ul", entries)
}

fn pills(ctx: &SectionContext<'_>) -> RenderNode {
    let badge = &ctx.config.skills.badge;
    let entries = ctx
        .indices()
        .map(|i| {
            ctx.item(i, name(ctx, i, TextRole::Small).into_iter().collect())
                .with_style("padding", badge.padding.clone())
                .with_style("border-radius", badge.border_radius.clone())
                .with_style("border", format!("1px solid {}", ctx.config.colors.border))
        })
        .collect();
    wrap("div", &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}
