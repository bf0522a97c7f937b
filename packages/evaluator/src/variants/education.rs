use super::{inline, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::RenderNode;
use vitae_model::{DatePosition, TextRole};

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Degree and school left, dates right", standard),
        VariantInfo::new("compact", "Degree, school and year on one line", compact),
        VariantInfo::new("detailed", "Adds location, GPA and honors lines", detailed),
        VariantInfo::new("card", "Each entry in a bordered card", card),
    ]
}

fn degree(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    let degree = ctx.item_field(index, "degree", TextRole::ItemTitle);
    let field = ctx
        .config
        .education
        .show_field
        .then(|| ctx.item_field(index, "field", TextRole::ItemTitle))
        .flatten();
    inline([degree, field], " in ")
}

fn dates(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    if ctx.config.education.show_dates {
        ctx.dates(index)
    } else {
        None
    }
}

fn gpa(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    if !ctx.config.education.show_gpa {
        return None;
    }
    let field = ctx.item_field(index, "gpa", TextRole::Small)?;
    inline([Some(RenderNode::text("GPA")), Some(field)], ": ")
}

fn with_dates(ctx: &SectionContext<'_>, index: usize, body: RenderNode) -> Vec<RenderNode> {
    let dates = dates(ctx, index);
    match ctx.config.education.date_position {
        DatePosition::Right => vec![split_row(body, dates)],
        DatePosition::Below => std::iter::once(body).chain(dates).collect(),
        DatePosition::Inline => inline([Some(body), dates], " | ").into_iter().collect(),
    }
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([
                degree(ctx, i),
                ctx.item_field_any(i, &["school", "institution"], TextRole::ItemSubtitle),
                gpa(ctx, i),
            ]);
            ctx.item(i, with_dates(ctx, i, body))
        })
        .collect();
    ctx.items_container("div", entries)
}

fn compact(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let line = inline(
                [
                    degree(ctx, i),
                    ctx.item_field_any(i, &["school", "institution"], TextRole::ItemSubtitle),
                    dates(ctx, i),
                ],
                ", ",
            );
            ctx.item(i, line.into_iter().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}

fn detailed(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([
                degree(ctx, i),
                inline(
                    [
                        ctx.item_field_any(i, &["school", "institution"], TextRole::ItemSubtitle),
                        ctx.item_field(i, "location", TextRole::Small),
                    ],
                    " • ",
                ),
                gpa(ctx, i),
                ctx.item_field(i, "honors", TextRole::Body),
            ]);
            ctx.item(i, with_dates(ctx, i, body))
        })
        .collect();
    ctx.items_container("div", entries)
}

fn card(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([
                degree(ctx, i),
                ctx.item_field_any(i, &["school", "institution"], TextRole::ItemSubtitle),
                gpa(ctx, i),
            ]);
            ctx.item(i, with_dates(ctx, i, body))
                .with_style("border", format!("1px solid {}", ctx.config.colors.border))
                .with_style("border-radius", "6px")
                .with_style("padding", "10px 12px")
        })
        .collect();
    ctx.items_container("div", entries)
}
