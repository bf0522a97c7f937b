//! Header variants.
//!
//! The header reads `personalInfo` only. Contact entries that are empty
//! are dropped in display mode and kept as placeholders in editable mode.
//! Social links follow `header.showSocialLinks` and the document's
//! `settings.includeSocialLinks`; the photo follows `header.showPhoto`,
//! the photo visibility option and `settings.includePhoto`.

use super::{inline, split_row, stack, wrap};
use crate::context::{initials, mail_href, tel_href, web_href, SectionContext};
use crate::registry::VariantInfo;
use crate::render_node::{EditAction, NodeRole, RenderNode};
use vitae_model::{Node, PhotoPosition, TextRole};

pub const DEFAULT: &str = "left-aligned";

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, PartialEq)]
enum Backdrop {
    None,
    Solid,
    Gradient,
    Card,
    Boxed,
}

#[derive(Clone, Copy, PartialEq)]
enum ContactLayout {
    /// One line with separators
    Inline,
    /// One entry per line
    Stacked,
    /// Full-width strip below the name block
    Bar,
    /// Bordered boxes with icons
    Boxes,
}

#[derive(Clone, Copy, PartialEq)]
enum Accent {
    None,
    Underline,
    Bar,
    Wave,
}

#[derive(Clone, Copy)]
struct Look {
    align: Align,
    backdrop: Backdrop,
    contact: ContactLayout,
    accent: Accent,
    /// Name block left, contacts right
    split: bool,
    summary: bool,
    /// Photo side when the template shows one
    photo: Option<PhotoPosition>,
    compact: bool,
}

const LEFT_ALIGNED: Look = Look {
    align: Align::Left,
    backdrop: Backdrop::None,
    contact: ContactLayout::Inline,
    accent: Accent::None,
    split: false,
    summary: false,
    photo: Some(PhotoPosition::Left),
    compact: false,
};

const CENTERED: Look = Look { align: Align::Center, photo: Some(PhotoPosition::Top), ..LEFT_ALIGNED };
const MINIMAL: Look = Look { photo: None, ..LEFT_ALIGNED };
const COMPACT: Look = Look { compact: true, photo: None, ..LEFT_ALIGNED };
const SPLIT: Look = Look { split: true, contact: ContactLayout::Stacked, ..LEFT_ALIGNED };
const BANNER: Look = Look { backdrop: Backdrop::Solid, ..LEFT_ALIGNED };
const GRADIENT_BANNER: Look = Look { backdrop: Backdrop::Gradient, align: Align::Center, ..LEFT_ALIGNED };
const ELEGANT_BANNER: Look = Look { backdrop: Backdrop::Solid, align: Align::Center, accent: Accent::Underline, ..LEFT_ALIGNED };
const ACCENT_BAR: Look = Look { accent: Accent::Bar, ..LEFT_ALIGNED };
const CREATIVE_UNDERLINE: Look = Look { accent: Accent::Underline, ..LEFT_ALIGNED };
const BANNER_WITH_SUMMARY: Look = Look { backdrop: Backdrop::Solid, summary: true, ..LEFT_ALIGNED };
const SIDEBAR_CARD: Look = Look { backdrop: Backdrop::Card, contact: ContactLayout::Stacked, photo: Some(PhotoPosition::Top), ..LEFT_ALIGNED };
const MODERN_SPLIT: Look = Look { split: true, accent: Accent::Bar, contact: ContactLayout::Stacked, ..LEFT_ALIGNED };
const BOXED_ACCENT: Look = Look { backdrop: Backdrop::Boxed, accent: Accent::Bar, ..LEFT_ALIGNED };
const SUMMARY_PHOTO_RIGHT: Look = Look { summary: true, photo: Some(PhotoPosition::Right), ..LEFT_ALIGNED };
const BOXED_CONTACT_ICONS: Look = Look { contact: ContactLayout::Boxes, ..LEFT_ALIGNED };
const CLEAN_SUMMARY_CONTACT: Look = Look { summary: true, contact: ContactLayout::Bar, photo: None, ..LEFT_ALIGNED };
const PHOTO_SUMMARY_CONTACT_BAR: Look = Look { summary: true, contact: ContactLayout::Bar, ..LEFT_ALIGNED };
const GRADIENT_SPLIT_CONTACT: Look = Look { backdrop: Backdrop::Gradient, split: true, contact: ContactLayout::Stacked, ..LEFT_ALIGNED };
const PHOTO_DARK_CONTACT_BAR: Look = Look { backdrop: Backdrop::Solid, contact: ContactLayout::Bar, ..LEFT_ALIGNED };
const WAVE_ACCENT: Look = Look { accent: Accent::Wave, ..LEFT_ALIGNED };

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("left-aligned", "Name, title and contacts flush left", |ctx| render(ctx, LEFT_ALIGNED)),
        VariantInfo::new("centered", "Everything centered", |ctx| render(ctx, CENTERED)),
        VariantInfo::new("minimal", "Name and contacts, no decoration", |ctx| render(ctx, MINIMAL)),
        VariantInfo::new("compact", "Name and title on one line", |ctx| render(ctx, COMPACT)),
        VariantInfo::new("split", "Name block left, contacts right", |ctx| render(ctx, SPLIT)),
        VariantInfo::new("banner", "Full-width colored band", |ctx| render(ctx, BANNER)),
        VariantInfo::new("gradient-banner", "Centered gradient band", |ctx| render(ctx, GRADIENT_BANNER)),
        VariantInfo::new("elegant-banner", "Centered band with underline", |ctx| render(ctx, ELEGANT_BANNER)),
        VariantInfo::new("accent-bar", "Accent bar beside the name", |ctx| render(ctx, ACCENT_BAR)),
        VariantInfo::new("creative-underline", "Accent underline below the name", |ctx| render(ctx, CREATIVE_UNDERLINE)),
        VariantInfo::new("banner-with-summary", "Band including the summary", |ctx| render(ctx, BANNER_WITH_SUMMARY)),
        VariantInfo::new("sidebar-card", "Card with photo or initials on top", |ctx| render(ctx, SIDEBAR_CARD)),
        VariantInfo::new("modern-split", "Split layout with accent bar", |ctx| render(ctx, MODERN_SPLIT)),
        VariantInfo::new("boxed-accent", "Bordered box with accent edge", |ctx| render(ctx, BOXED_ACCENT)),
        VariantInfo::new("summary-photo-right", "Summary beside a right photo", |ctx| render(ctx, SUMMARY_PHOTO_RIGHT)),
        VariantInfo::new("boxed-contact-icons", "Contacts in bordered boxes", |ctx| render(ctx, BOXED_CONTACT_ICONS)),
        VariantInfo::new("clean-summary-contact", "Summary, then a contact strip", |ctx| render(ctx, CLEAN_SUMMARY_CONTACT)),
        VariantInfo::new("photo-summary-contact-bar", "Photo, summary and contact strip", |ctx| render(ctx, PHOTO_SUMMARY_CONTACT_BAR)),
        VariantInfo::new("gradient-split-contact", "Gradient band, contacts right", |ctx| render(ctx, GRADIENT_SPLIT_CONTACT)),
        VariantInfo::new("photo-dark-contact-bar", "Dark band with contact strip", |ctx| render(ctx, PHOTO_DARK_CONTACT_BAR)),
        VariantInfo::new("wave-accent", "Wave divider under the header", |ctx| render(ctx, WAVE_ACCENT)),
    ]
}

struct Contact {
    key: &'static str,
    icon: &'static str,
    href: Option<fn(&str) -> String>,
    social: bool,
}

const CONTACTS: [Contact; 7] = [
    Contact { key: "email", icon: "mail", href: Some(mail_href), social: false },
    Contact { key: "phone", icon: "phone", href: Some(tel_href), social: false },
    Contact { key: "location", icon: "map-pin", href: None, social: false },
    Contact { key: "linkedin", icon: "linkedin", href: Some(web_href), social: true },
    Contact { key: "github", icon: "github", href: Some(web_href), social: true },
    Contact { key: "portfolio", icon: "globe", href: Some(web_href), social: true },
    Contact { key: "website", icon: "globe", href: Some(web_href), social: true },
];

fn render(ctx: &SectionContext<'_>, look: Look) -> RenderNode {
    let header = &ctx.config.header;
    let on_dark = matches!(look.backdrop, Backdrop::Solid | Backdrop::Gradient);
    let text_color = header
        .text_color
        .clone()
        .or_else(|| on_dark.then(|| ctx.config.colors.text.light.clone()));

    let name = ctx
        .field_with(TextRole::Name, ctx.personal_address("fullName"), ctx.personal().text_field("fullName"), "Your Name")
        .map(|node| recolor(node, text_color.as_deref()));
    let title = ctx
        .personal_field(TextRole::Title, "title")
        .map(|node| recolor(node, text_color.as_deref()));

    let name_block = if look.compact {
        inline([name, title], " | ").unwrap_or_else(super::empty_group)
    } else {
        let mut block = stack([name, title]);
        match look.accent {
            Accent::Bar => {
                block = block
                    .with_style("border-left", format!("4px solid {}", ctx.accent()))
                    .with_style("padding-left", "12px")
            }
            Accent::Underline => {
                block = block.with_child(
                    RenderNode::element("hr", NodeRole::Divider)
                        .with_style("border-top", format!("2px solid {}", ctx.accent()))
                        .with_style("width", "64px"),
                )
            }
            Accent::None | Accent::Wave => {}
        }
        block
    };

    let contacts = contacts(ctx, look, text_color.as_deref());
    let summary = look
        .summary
        .then(|| ctx.personal_field(TextRole::Body, "summary"))
        .flatten()
        .map(|node| recolor(node, text_color.as_deref()));

    let main = if look.split {
        split_row(stack([Some(name_block), summary]), contacts.clone().filter(|_| look.contact != ContactLayout::Bar))
    } else {
        stack([
            Some(name_block),
            summary,
            contacts.clone().filter(|_| look.contact != ContactLayout::Bar),
        ])
    };

    let body = match photo(ctx, look) {
        Some(photo) => match header.photo_position.or(look.photo) {
            Some(PhotoPosition::Right) => split_row(main, Some(photo)),
            Some(PhotoPosition::Top) => stack([Some(photo), Some(main)]),
            _ => RenderNode::element("div", NodeRole::Row)
                .with_style("display", "flex")
                .with_style("gap", "16px")
                .with_child(photo)
                .with_child(main),
        },
        None => main,
    };

    let mut node = RenderNode::element("header", NodeRole::Header)
        .with_attr("data-align", if look.align == Align::Center { "center" } else { "left" })
        .with_style("text-align", if look.align == Align::Center { "center" } else { "left" })
        .with_child(body);

    if look.contact == ContactLayout::Bar {
        if let Some(bar) = contacts {
            node = node.with_child(
                bar.with_style("border-top", format!("1px solid {}", ctx.config.colors.border))
                    .with_style("padding-top", "8px")
                    .with_style("margin-top", "8px"),
            );
        }
    }

    if look.accent == Accent::Wave {
        node = node.with_child(
            RenderNode::element("div", NodeRole::Divider)
                .with_attr("data-shape", "wave")
                .with_style("height", "12px")
                .with_style("background", ctx.accent().to_string()),
        );
    }

    if let Some(margin) = &header.margin_bottom {
        node = node.with_style("margin-bottom", margin.clone());
    }
    if let Some(padding) = &header.padding {
        node = node.with_style("padding", padding.clone());
    }
    backdrop(ctx, node, look)
}

fn backdrop(ctx: &SectionContext<'_>, node: RenderNode, look: Look) -> RenderNode {
    let colors = &ctx.config.colors;
    let band = ctx
        .config
        .header
        .background_color
        .clone()
        .unwrap_or_else(|| colors.primary.clone());

    match look.backdrop {
        Backdrop::None => node,
        Backdrop::Solid => node.with_style("background", band).with_style("padding", "24px 32px"),
        Backdrop::Gradient => {
            let end = colors.secondary.clone().unwrap_or_else(|| colors.text.primary.clone());
            node.with_style("background", format!("linear-gradient(135deg, {} 0%, {} 100%)", band, end))
                .with_style("padding", "24px 32px")
        }
        Backdrop::Card => node
            .with_style("background", colors.background.section.clone())
            .with_style("border-radius", "8px")
            .with_style("padding", "16px"),
        Backdrop::Boxed => node
            .with_style("border", format!("1px solid {}", colors.border))
            .with_style("padding", "16px"),
    }
}

fn recolor(node: RenderNode, color: Option<&str>) -> RenderNode {
    match color {
        Some(color) => node.with_style("color", color.to_string()),
        None => node,
    }
}

fn contacts(ctx: &SectionContext<'_>, look: Look, text_color: Option<&str>) -> Option<RenderNode> {
    let header = &ctx.config.header;
    let social = header.show_social_links && ctx.setting_enabled("includeSocialLinks");
    let personal = ctx.personal();

    let entries: Vec<RenderNode> = CONTACTS
        .iter()
        .filter(|contact| social || !contact.social)
        // `website` is a legacy alias; only show it when it carries a value
        .filter(|contact| contact.key != "website" || personal.text_field("website").is_some())
        .filter_map(|contact| {
            let value = personal.get(contact.key).and_then(Node::display);
            let address = ctx.personal_address(contact.key);
            let field = match contact.href {
                Some(href) => ctx.link(TextRole::Contact, address, value.as_deref(), href),
                None => ctx.field(TextRole::Contact, address, value.as_deref()),
            }?;

            let mut entry = RenderNode::element("span", NodeRole::Contact)
                .with_key(contact.key)
                .with_child(recolor(field, text_color));
            if header.contact_icons.show {
                let icon_color = header
                    .contact_icons
                    .color
                    .clone()
                    .or_else(|| text_color.map(str::to_string))
                    .unwrap_or_else(|| ctx.accent().to_string());
                entry = entry
                    .with_attr("data-icon", contact.icon)
                    .with_style("--icon-size", header.contact_icons.size.clone())
                    .with_style("--icon-color", icon_color);
            }
            if look.contact == ContactLayout::Boxes {
                entry = entry
                    .with_style("border", format!("1px solid {}", ctx.config.colors.border))
                    .with_style("border-radius", "6px")
                    .with_style("padding", "4px 8px");
            }
            Some(entry)
        })
        .collect();

    if entries.is_empty() {
        return None;
    }

    let gap = &ctx.config.spacing.contact_gap;
    Some(match look.contact {
        ContactLayout::Stacked => stack(entries.into_iter().map(Some)).with_style("gap", "2px"),
        _ => wrap("div", gap, entries).with_style(
            "justify-content",
            if look.align == Align::Center { "center" } else { "flex-start" },
        ),
    })
}

fn photo(ctx: &SectionContext<'_>, look: Look) -> Option<RenderNode> {
    let header = &ctx.config.header;
    if look.photo.is_none() {
        return None;
    }
    if !(header.show_photo && ctx.options.show_photo() && ctx.setting_enabled("includePhoto")) {
        return None;
    }

    let size = header.photo_size.clone().unwrap_or_else(|| "96px".to_string());
    let src = ctx.personal().text_field("photo");
    let mut node = match src {
        Some(src) => RenderNode::element("img", NodeRole::Photo)
            .with_attr("src", src)
            .with_attr("alt", ctx.personal().text_field("fullName").unwrap_or("Profile photo")),
        None if look.backdrop == Backdrop::Card || ctx.editable() => {
            let name = ctx.personal().text_field("fullName").unwrap_or_default();
            RenderNode::element("div", NodeRole::Photo)
                .with_attr("data-initials", initials(name))
                .with_child(RenderNode::text(initials(name)))
                .with_style("background", ctx.accent().to_string())
                .with_style("color", ctx.config.colors.text.light.clone())
        }
        None => return None,
    };

    node = node
        .with_style("width", size.clone())
        .with_style("height", size)
        .with_style("border-radius", "50%")
        .with_style("object-fit", "cover");

    if let Some(action) = ctx.action(EditAction::SetField {
        address: ctx.personal_address("photo"),
    }) {
        node = node.with_child(RenderNode::Affordance {
            action,
            label: "Change photo".to_string(),
        });
    }
    Some(node)
}
