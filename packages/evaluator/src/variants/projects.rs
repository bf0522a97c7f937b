use super::{grid, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Name, description and technologies", standard),
        VariantInfo::new("grid", "Two-column cards", grid_view),
        VariantInfo::new("detailed", "Adds link, dates and highlights", detailed),
    ]
}

fn title(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    ctx.item_field_any(index, &["name", "title"], TextRole::ItemTitle)
}

fn technologies(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    ctx.values(index, "technologies", NodeRole::Items, "div").map(|node| {
        node.with_style("display", "flex")
            .with_style("flex-wrap", "wrap")
            .with_style("color", ctx.accent().to_string())
    })
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let children = [
                title(ctx, i),
                ctx.item_field(i, "description", TextRole::Body),
                technologies(ctx, i),
            ];
            ctx.item(i, children.into_iter().flatten().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}

fn grid_view(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let card = stack([
                title(ctx, i),
                ctx.item_field(i, "description", TextRole::Small),
                technologies(ctx, i),
            ]);
            ctx.item(i, vec![card])
                .with_style("border", format!("1px solid {}", ctx.config.colors.border))
                .with_style("border-radius", "6px")
                .with_style("padding", "10px")
        })
        .collect();
    grid(2, &ctx.config.spacing.item_gap, entries).with_opt_child(ctx.add_control())
}

fn detailed(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let heading = split_row(
                stack([title(ctx, i), ctx.item_link(i, "url", TextRole::Small)]),
                ctx.dates(i),
            );
            let children = [
                Some(heading),
                ctx.item_field(i, "description", TextRole::Body),
                ctx.values(i, "highlights", NodeRole::Bullets, "ul"),
                technologies(ctx, i),
            ];
            ctx.item(i, children.into_iter().flatten().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}
