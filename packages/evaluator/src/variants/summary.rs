use crate::context::SectionContext;
use crate::registry::VariantInfo;
use crate::render_node::{NodeRole, RenderNode};
use vitae_model::TextRole;

pub const DEFAULT: &str = "standard";

pub fn variants() -> Vec<VariantInfo> {
    vec![
        VariantInfo::new("standard", "Single paragraph", standard),
        VariantInfo::new("bullets", "One bullet per line or sentence", bullets),
    ]
}

fn standard(ctx: &SectionContext<'_>) -> RenderNode {
    RenderNode::element("div", NodeRole::Items).with_opt_child(ctx.personal_field(TextRole::Body, "summary"))
}

/// Lines of the summary, or its sentences when it is a single line
pub fn split_points(summary: &str) -> Vec<&str> {
    let lines: Vec<&str> = summary
        .lines()
        .map(|l| l.trim().trim_start_matches(['-', '•', '*']).trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() > 1 {
        return lines;
    }

    let mut points = Vec::new();
    let text = summary.trim();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let next = text[i + c.len_utf8()..].chars().next();
        if matches!(c, '.' | '!' | '?') && next.map_or(true, char::is_whitespace) {
            let sentence = text[start..i + c.len_utf8()].trim();
            if !sentence.is_empty() {
                points.push(sentence);
            }
            start = i + c.len_utf8();
        }
    }
    let rest = text[start..].trim();
    if !rest.is_empty() {
        points.push(rest);
    }
    points
}

fn bullets(ctx: &SectionContext<'_>) -> RenderNode {
    // editable mode edits the summary as one field
    if ctx.editable() {
        return standard(ctx);
    }

    let summary = ctx.personal().text_field("summary").unwrap_or_default();
    let address = ctx.personal_address("summary");
    let points = split_points(summary).into_iter().filter_map(|point| {
        ctx.field(TextRole::Body, address.clone(), Some(point))
            .map(|field| RenderNode::element("li", NodeRole::Bullet).with_child(field))
    });
    RenderNode::element("ul", NodeRole::Bullets)
        .with_style("gap", ctx.config.spacing.bullet_gap.clone())
        .with_children(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_points_by_line() {
        assert_eq!(
            split_points("- Led a team of 6\n- Shipped v2\n\n"),
            vec!["Led a team of 6", "Shipped v2"]
        );
    }

    #[test]
    fn test_split_points_by_sentence() {
        assert_eq!(
            split_points("Engineer with 8 years. Loves Rust! Version 2.0 shipped"),
            vec!["Engineer with 8 years.", "Loves Rust!", "Version 2.0 shipped"]
        );
    }

    #[test]
    fn test_split_points_empty() {
        assert!(split_points("   ").is_empty());
    }
}
