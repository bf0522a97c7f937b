use super::{inline, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::RenderNode;
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Role and organization left, dates right", standard),
        VariantInfo::new("compact", "Role, organization and dates on one line", compact),
    ]
}

fn role(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    ctx.item_field_any(index, &["role", "position"], TextRole::ItemTitle)
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let left = stack([role(ctx, i), ctx.item_field(i, "organization", TextRole::ItemSubtitle)]);
            let children = [
                Some(split_row(left, ctx.dates(i))),
                ctx.item_field(i, "description", TextRole::Body),
            ];
            ctx.item(i, children.into_iter().flatten().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}

fn compact(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let line = inline(
                [role(ctx, i), ctx.item_field(i, "organization", TextRole::ItemSubtitle), ctx.dates(i)],
                " · ",
            );
            ctx.item(i, line.into_iter().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}
