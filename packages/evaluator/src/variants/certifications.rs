use super::{inline, split_row, stack, wrap};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::RenderNode;
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Name and issuer left, date right", standard),
        VariantInfo::new("badges", "Accent-bordered badges", badges),
        VariantInfo::new("detailed", "Adds credential id and link", detailed),
    ]
}

fn name(ctx: &SectionContext<'_>, index: usize, role: TextRole) -> Option<RenderNode> {
    ctx.item_field_any(index, &["name", "title"], role)
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let left = stack([
                name(ctx, i, TextRole::ItemTitle),
                ctx.item_field(i, "issuer", TextRole::ItemSubtitle),
            ]);
            ctx.item(i, vec![split_row(left, ctx.date_field(i, "date"))])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn badges(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let content = inline([name(ctx, i, TextRole::Small), ctx.item_field(i, "issuer", TextRole::Small)], " · ");
            ctx.item(i, content.into_iter().collect())
                .with_style("border", format!("1px solid {}", ctx.accent()))
                .with_style("border-radius", "4px")
                .with_style("padding", "4px 10px")
        })
        .collect();
    wrap("div", &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}

fn detailed(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let left = stack([
                name(ctx, i, TextRole::ItemTitle),
                ctx.item_field(i, "issuer", TextRole::ItemSubtitle),
                inline(
                    [
                        ctx.item_field(i, "credentialId", TextRole::Small),
                        ctx.item_link(i, "url", TextRole::Small),
                    ],
                    " · ",
                ),
            ]);
            let right = stack([ctx.date_field(i, "date"), ctx.date_field(i, "expiryDate")]);
            ctx.item(i, vec![split_row(left, Some(right))])
        })
        .collect();
    ctx.items_container("div", entries)
}
