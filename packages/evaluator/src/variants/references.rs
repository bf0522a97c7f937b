use super::{inline, stack};
use crate::context::{mail_href, tel_href, SectionContext};
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "available";

pub const ON_REQUEST: &str = "Available upon request";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("available", "Full reference entries, or a request note when empty", available)
            .keeps_empty(),
        VariantInfo::new("compact", "Name, title and company on one line", compact),
    ]
}

fn contact(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    let base = ctx.item_address(index)?;
    let email = ctx.item_value(index, "email");
    let phone = ctx.item_value(index, "phone");
    inline(
        [
            ctx.link(TextRole::Contact, base.field("email"), email.as_deref(), mail_href),
            ctx.link(TextRole::Contact, base.field("phone"), phone.as_deref(), tel_href),
        ],
        " · ",
    )
}

fn available(ctx: &SectionContext<'_>) -> RenderNode {
    if ctx.items.is_empty() && !ctx.editable() {
        return RenderNode::element("p", NodeRole::Items)
            .with_styles(ctx.styles(TextRole::Body))
            .with_child(RenderNode::text(ON_REQUEST));
    }

    let entries = ctx
        .indices()
        .map(|i| {
            let body = stack([
                ctx.item_field(i, "name", TextRole::ItemTitle),
                inline(
                    [
                        ctx.item_field(i, "title", TextRole::ItemSubtitle),
                        ctx.item_field(i, "company", TextRole::ItemSubtitle),
                    ],
                    ", ",
                ),
                contact(ctx, i),
            ]);
            ctx.item(i, vec![body])
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
                    ctx.item_field(i, "name", TextRole::Body),
                    ctx.item_field(i, "title", TextRole::Small),
                    ctx.item_field(i, "company", TextRole::Small),
                ],
                ", ",
            );
            ctx.item(i, line.into_iter().collect())
        })
        .collect();
    ctx.items_container("div", entries)
}
