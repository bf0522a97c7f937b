//! Variants shared by the awards and achievements sections.

use super::{grid, inline, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Title and issuer left, date right, description", standard),
        VariantInfo::new("bullets", "Bulleted titles with issuer", |ctx| listed(ctx, "ul")),
        VariantInfo::new("numbered", "Numbered titles with issuer", |ctx| listed(ctx, "ol")),
        VariantInfo::new("cards", "Two-column accent cards", cards),
        VariantInfo::new("compact", "Title, issuer and year on one line", compact),
        VariantInfo::new("metrics", "Headline metric beside each title", metrics),
        VariantInfo::new("timeline", "Dates on a vertical accent line", timeline),
    ]
}

fn title(ctx: &SectionContext<'_>, index: usize, role: TextRole) -> Option<RenderNode> {
    ctx.item_field_any(index, &["title", "name"], role)
}

fn issuer(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    ctx.item_field(index, "issuer", TextRole::ItemSubtitle)
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let left = stack([title(ctx, i, TextRole::ItemTitle), issuer(ctx, i)]);
            let children = [
                Some(split_row(left, ctx.date_field(i, "date"))),
                ctx.item_field(i, "description", TextRole::Body),
            ];
            ctx.item(i, children.into_iter().flatten().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}

fn listed(ctx: &SectionContext<'_>, tag: &str) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let line = inline([title(ctx, i, TextRole::Body), issuer(ctx, i), ctx.date_field(i, "date")], " · ");
            ctx.item_as("li", i, line.into_iter().collect())
        })
        .collect();
    ctx.items_container(tag, entries)
}

fn cards(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let card = stack([
                title(ctx, i, TextRole::ItemTitle),
                issuer(ctx, i),
                ctx.date_field(i, "date"),
                ctx.item_field(i, "description", TextRole::Small),
            ]);
            ctx.item(i, vec![card])
                .with_style("border-top", format!("3px solid {}", ctx.accent()))
                .with_style("background", ctx.config.colors.background.section.clone())
                .with_style("padding", "10px")
        })
        .collect();
    grid(2, &ctx.config.spacing.item_gap, entries).with_opt_child(ctx.add_control())
}

fn compact(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let line = inline([title(ctx, i, TextRole::Body), issuer(ctx, i), ctx.date_field(i, "date")], ", ");
            ctx.item(i, line.into_iter().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}

fn metrics(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let metric = ctx.item_field(i, "metric", TextRole::Title).map(|m| {
                RenderNode::element("div", NodeRole::Badge)
                    .with_style("color", ctx.accent().to_string())
                    .with_style("min-width", "64px")
                    .with_child(m)
            });
            let body = stack([
                title(ctx, i, TextRole::ItemTitle),
                ctx.item_field(i, "description", TextRole::Small),
            ]);
            let row = RenderNode::element("div", NodeRole::Row)
                .with_style("display", "flex")
                .with_style("gap", "12px")
                .with_opt_child(metric)
                .with_child(body);
            ctx.item(i, vec![row])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn timeline(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([
                ctx.date_field(i, "date"),
                title(ctx, i, TextRole::ItemTitle),
                issuer(ctx, i),
                ctx.item_field(i, "description", TextRole::Small),
            ]);
            ctx.item(i, vec![body])
                .with_style("border-left", format!("2px solid {}", ctx.accent()))
                .with_style("padding-left", "12px")
        })
        .collect();
    ctx.items_container("div", entries)
}
