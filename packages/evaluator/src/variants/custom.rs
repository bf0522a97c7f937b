//! Custom sections.
//!
//! A custom descriptor is bound to the `customSections` entry sharing its
//! id. The renderer hands that entry's `items` to these variants, so edit
//! actions address `customSections.<i>.items` and the entry title becomes
//! the section heading.

use super::{inline, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::RenderNode;
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

#[derive(Clone, Copy)]
enum Look {
    Standard,
    List,
}

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Dated entries", |ctx| render(ctx, Look::Standard)),
        VariantInfo::new("list", "Bulleted entries", |ctx| render(ctx, Look::List)),
    ]
}

fn render(ctx: &SectionContext<'_>, look: Look) -> RenderNode {
    match look {
        Look::Standard => {
            let rows = ctx
                .indices()
                .map(|i| {
                    let left = stack([
                        ctx.item_field(i, "title", TextRole::ItemTitle),
                        ctx.item_field(i, "content", TextRole::Body),
                        ctx.item_link(i, "url", TextRole::Small),
                    ]);
                    ctx.item(i, vec![split_row(left, ctx.date_field(i, "date"))])
                })
                .collect();
            ctx.items_container("div", rows)
        }
        Look::List => {
            let rows = ctx
                .indices()
                .map(|i| {
                    let line = inline(
                        [
                            ctx.item_field(i, "title", TextRole::ItemTitle),
                            ctx.item_field(i, "content", TextRole::Body),
                        ],
                        ": ",
                    );
                    ctx.item_as("li", i, line.into_iter().collect())
                })
                .collect();
            ctx.items_container("ul", rows)
        }
    }
}
