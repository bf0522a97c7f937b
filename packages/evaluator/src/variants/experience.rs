use super::{empty_group, inline, split_row, stack};
use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::{DatePosition, TextRole};

pub const DEFAULT: &str = "standard";

#[derive(Clone, Copy)]
enum Frame {
    Plain,
    Timeline,
    Card,
}

#[derive(Clone, Copy)]
struct Look {
    frame: Frame,
    description: bool,
    bullets: bool,
    /// Company and location on their own lines
    expanded: bool,
}

const STANDARD: Look = Look {
    frame: Frame::Plain,
    description: true,
    bullets: true,
    expanded: false,
};

const COMPACT: Look = Look {
    description: false,
    ..STANDARD
};

const DETAILED: Look = Look {
    expanded: true,
    ..STANDARD
};

const TIMELINE: Look = Look {
    frame: Frame::Timeline,
    ..STANDARD
};

const CARD: Look = Look {
    frame: Frame::Card,
    ..STANDARD
};

const MINIMAL: Look = Look {
    description: false,
    bullets: false,
    ..STANDARD
};

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Title and company left, dates right, bullets", |ctx| render(ctx, STANDARD)),
        VariantInfo::new("compact", "Single heading line, bullets only", |ctx| render(ctx, COMPACT)),
        VariantInfo::new("detailed", "Company and location on separate lines", |ctx| render(ctx, DETAILED)),
        VariantInfo::new("timeline", "Entries on a vertical accent line", |ctx| render(ctx, TIMELINE)),
        VariantInfo::new("card", "Each entry in a bordered card", |ctx| render(ctx, CARD)),
        VariantInfo::new("minimal", "Title, company and dates only", |ctx| render(ctx, MINIMAL)),
    ]
}

fn render(ctx: &SectionContext<'_>, look: Look) -> RenderNode {
    let entries = ctx.indices().map(|i| entry(ctx, i, look)).collect();
    ctx.items_container("div", entries)
}

fn entry(ctx: &SectionContext<'_>, index: usize, look: Look) -> RenderNode {
    let settings = &ctx.config.experience;
    let title = ctx.item_field_any(index, &["position", "title"], TextRole::ItemTitle);
    let company = ctx.item_field(index, "company", TextRole::ItemSubtitle);
    let location = settings
        .show_location
        .then(|| ctx.item_field(index, "location", TextRole::Small))
        .flatten();
    let dates = ctx.dates(index);

    let heading = if look.expanded {
        stack([title, company, location])
    } else if look.description || look.bullets {
        stack([title, inline([company, location], " • ")])
    } else {
        // minimal: everything on one line
        inline([title, company], ", ").unwrap_or_else(empty_group)
    };

    let mut children = match settings.date_position {
        DatePosition::Right => vec![split_row(heading, dates)],
        DatePosition::Below => vec![heading].into_iter().chain(dates).collect(),
        DatePosition::Inline => vec![inline([Some(heading), dates], " | ").unwrap_or_else(empty_group)],
    };

    if look.description {
        children.extend(ctx.item_field(index, "description", TextRole::Body));
    }
    if look.bullets {
        children.extend(ctx.bullets(index));
    }

    let item = ctx.item(index, children);
    match look.frame {
        Frame::Plain => item,
        Frame::Timeline => item
            .with_style("border-left", format!("2px solid {}", ctx.accent()))
            .with_style("padding-left", "12px")
            .with_child(
                RenderNode::element("span", NodeRole::Divider)
                    .with_attr("data-marker", "dot")
                    .with_style("background", ctx.accent().to_string()),
            ),
        Frame::Card => item
            .with_style("border", format!("1px solid {}", ctx.config.colors.border))
            .with_style("border-radius", "6px")
            .with_style("padding", "12px")
            .with_style("background", ctx.config.colors.background.section.clone()),
    }
}
