use super::{grid, inline, split_row, stack, wrap};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

const NAME_KEYS: [&str; 2] = ["language", "name"];

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Language left, proficiency right", standard),
        VariantInfo::new("compact", "One line: Language (Level), ...", compact),
        VariantInfo::new("flags", "Language with a proficiency marker", flags),
        VariantInfo::new("grid", "Two-column grid", grid_view),
        VariantInfo::new("pills", "Badges with proficiency", pills),
    ]
}

fn language(ctx: &SectionContext<'_>, index: usize, role: TextRole) -> Option<RenderNode> {
    ctx.item_field_any(index, &NAME_KEYS, role)
}

fn proficiency(ctx: &SectionContext<'_>, index: usize) -> Option<RenderNode> {
    ctx.item_field(index, "proficiency", TextRole::Small)
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let name = language(ctx, i, TextRole::Body).unwrap_or_else(super::empty_group);
            ctx.item(i, vec![split_row(name, proficiency(ctx, i))])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn compact(ctx: &SectionContext<'_>) -> RenderNode {
    let mut line = RenderNode::element("p", NodeRole::Items);
    for i in ctx.indices() {
        if i > 0 {
            line = line.with_child(RenderNode::text(", "));
        }
        let level = proficiency(ctx, i).map(|p| {
            RenderNode::element("span", NodeRole::Group)
                .with_child(RenderNode::text(" ("))
                .with_child(p)
                .with_child(RenderNode::text(")"))
        });
        let entry = ctx
            .item(i, language(ctx, i, TextRole::Body).into_iter().chain(level).collect())
            .with_style("display", "inline");
        line = line.with_child(entry);
    }
    line.with_opt_child(ctx.add_control())
}

fn flags(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| {
            let marker = RenderNode::element("span", NodeRole::Divider)
                .with_attr("data-marker", "flag")
                .with_style("width", "6px")
                .with_style("height", "6px")
                .with_style("border-radius", "50%")
                .with_style("background", ctx.accent().to_string());
            let row = RenderNode::element("div", NodeRole::Row)
                .with_style("display", "flex")
                .with_style("align-items", "center")
                .with_style("gap", "8px")
                .with_child(marker)
                .with_opt_child(inline([language(ctx, i, TextRole::Body), proficiency(ctx, i)], " · "));
            ctx.item(i, vec![row])
        })
        .collect();
    ctx.items_container("div", entries)
}

fn grid_view(ctx: &SectionContext<'_>) -> RenderNode {
    let entries = ctx
        .indices()
        .map(|i| ctx.item(i, vec![stack([language(ctx, i, TextRole::ItemTitle), proficiency(ctx, i)])]))
        .collect();
    grid(2, &ctx.config.spacing.item_gap, entries).with_opt_child(ctx.add_control())
}

fn pills(ctx: &SectionContext<'_>) -> RenderNode {
    let badge = &ctx.config.skills.badge;
    let entries = ctx
        .indices()
        .map(|i| {
            let content = inline([language(ctx, i, TextRole::Small), proficiency(ctx, i)], " · ");
            ctx.item(i, content.into_iter().collect())
                .with_style("padding", badge.padding.clone())
                .with_style("border-radius", badge.border_radius.clone())
                .with_style("background", ctx.config.colors.background.accent.clone())
        })
        .collect();
    wrap("div", &ctx.config.spacing.skill_gap, entries).with_opt_child(ctx.add_control())
}
