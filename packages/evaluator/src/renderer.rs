//! # Document Renderer
//!
//! Turns a document plus a template into a `RenderDocument`:
//!
//! 1. plan: header descriptor plus the assembled main/sidebar columns,
//!    minus sections hidden by the visibility toggles. Custom sections the
//!    template does not place are appended first
//!    (`TemplateConfig::with_custom_sections`)
//! 2. render each section through the variant registry
//! 3. compose the page: header, then the column layout
//!
//! The steps are public so the editor pipeline can cache step 2 per
//! section and only re-render sections whose data changed.

use crate::context::{RenderMode, SectionContext};
use crate::hooks::EditHooks;
use crate::layout::{assemble, Columns};
use crate::registry::VariantRegistry;
use crate::render_node::{EditAction, NodeRole, RenderDocument, RenderNode};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use vitae_model::{
    Document, EditAddress, HeadingStyle, LayoutType, Node, SectionDescriptor, SectionType,
    StyleOptions, TemplateConfig, TextRole, CUSTOM_SECTIONS,
};

/// Per-render variant picks, winning over everything the template says
pub type VariantOverrides = BTreeMap<SectionType, String>;

/// Everything besides the document that a render depends on
#[derive(Clone, Copy)]
pub struct RenderScope<'a> {
    pub config: &'a TemplateConfig,
    pub options: &'a StyleOptions,
    pub mode: RenderMode,
    pub hooks: &'a dyn EditHooks,
    pub overrides: &'a VariantOverrides,
}

/// Sections to render, in order
pub struct RenderPlan<'a> {
    pub header: Cow<'a, SectionDescriptor>,
    pub columns: Columns<'a>,
}

pub struct Renderer {
    registry: VariantRegistry,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_registry(VariantRegistry::new())
    }

    pub fn with_registry(registry: VariantRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    pub fn render(
        &self,
        document: &Document,
        config: &TemplateConfig,
        options: &StyleOptions,
        mode: RenderMode,
        hooks: &dyn EditHooks,
        overrides: &VariantOverrides,
    ) -> RenderDocument {
        let scope = RenderScope {
            config,
            options,
            mode,
            hooks,
            overrides,
        };
        self.render_scoped(document, &scope)
    }

    pub fn render_scoped(&self, document: &Document, scope: &RenderScope<'_>) -> RenderDocument {
        info!(template = %scope.config.id, mode = ?scope.mode, "Rendering resume");

        let config = scope.config.with_custom_sections(document);
        let scope = &RenderScope { config: &config, ..*scope };
        let plan = self.plan(scope);
        let header = self.render_section(document, &plan.header, scope);
        let render_all = |sections: &[&SectionDescriptor]| -> Vec<RenderNode> {
            sections
                .iter()
                .filter_map(|section| self.render_section(document, section, scope))
                .collect()
        };
        let main = render_all(&plan.columns.main);
        let sidebar = render_all(&plan.columns.sidebar);

        info!(main = main.len(), sidebar = sidebar.len(), "Rendered resume");
        self.compose(scope.config, header, main, sidebar)
    }

    /// Header descriptor and visible columns for this render
    pub fn plan<'a>(&self, scope: &RenderScope<'a>) -> RenderPlan<'a> {
        let config = scope.config;
        if config.section_heading.style == HeadingStyle::Unknown {
            warn!(template = %config.id, "Unknown section heading style, rendering as simple");
        }

        let header = match config.header_section() {
            Some(section) => Cow::Borrowed(section),
            None => Cow::Owned(SectionDescriptor::new(SectionType::Header, "header", i32::MIN)),
        };

        let mut columns = assemble(&config.sections, config.layout.kind);
        columns.main.retain(|s| scope.options.is_section_visible(s.kind));
        columns.sidebar.retain(|s| scope.options.is_section_visible(s.kind));

        RenderPlan { header, columns }
    }

    /// Document data a section reads; equal data (by `Node::same`) renders equally
    pub fn section_data(document: &Document, section: &SectionDescriptor) -> Vec<Node> {
        let kind = section.kind;
        if kind == SectionType::Custom {
            return match document.custom_section(&section.id) {
                Some((index, entry)) => vec![entry.clone(), Node::from(index as i64)],
                None => Vec::new(),
            };
        }
        match kind.list_key() {
            Some(key) => document.list(key).to_vec(),
            None => {
                let mut data = vec![document.personal_info().clone()];
                if kind == SectionType::Header {
                    data.push(document.settings().cloned().unwrap_or(Node::Null));
                }
                data
            }
        }
    }

    /// Render one section, or `None` when display mode has nothing to show
    pub fn render_section(
        &self,
        document: &Document,
        section: &SectionDescriptor,
        scope: &RenderScope<'_>,
    ) -> Option<RenderNode> {
        let kind = section.kind;
        let requested = scope
            .overrides
            .get(&kind)
            .map(String::as_str)
            .or(section.variant.as_deref())
            .or_else(|| scope.config.configured_variant(kind));
        let info = self.registry.resolve_or_default(kind, requested)?;

        let (items, list): (&[Node], Option<EditAddress>) = match (kind, kind.list_key()) {
            (SectionType::Custom, Some(key)) => {
                let Some((index, entry)) = document.custom_section(&section.id) else {
                    debug!(section = %section.id, "No custom section with this id");
                    return None;
                };
                let items = entry.get("items").and_then(Node::as_list).unwrap_or(&[]);
                (items, Some(EditAddress::key(key).index(index).field("items")))
            }
            (_, Some(key)) => (document.list(key), Some(EditAddress::key(key))),
            (_, None) => (&[], None),
        };

        if scope.mode == RenderMode::Display && !info.keeps_empty {
            let empty = match kind {
                SectionType::Header => false,
                SectionType::Summary => document.personal_info().get("summary").map_or(true, Node::is_blank),
                _ => items.is_empty(),
            };
            if empty {
                debug!(section = %section.id, "Skipping empty section");
                return None;
            }
        }

        let ctx = SectionContext {
            kind,
            descriptor: section,
            config: scope.config,
            options: scope.options,
            mode: scope.mode,
            hooks: scope.hooks,
            document,
            items,
            list,
        };
        let body = info.render(&ctx);

        if kind == SectionType::Header {
            return Some(body.with_key(section.id.clone()).with_attr("data-variant", info.id));
        }

        Some(
            RenderNode::element("section", NodeRole::Section)
                .with_key(section.id.clone())
                .with_attr("data-section", kind.as_str())
                .with_attr("data-variant", info.id)
                .with_style("margin-bottom", scope.config.spacing.section_gap.clone())
                .with_child(heading(&ctx))
                .with_child(body),
        )
    }

    /// Page root: header first, then the columns
    pub fn compose(
        &self,
        config: &TemplateConfig,
        header: Option<RenderNode>,
        main: Vec<RenderNode>,
        sidebar: Vec<RenderNode>,
    ) -> RenderDocument {
        let main_column = RenderNode::element("main", NodeRole::Main).with_children(main);
        let body = match config.layout.kind {
            LayoutType::SingleColumn => main_column,
            layout => {
                let layout_config = &config.layout;
                let main_column = main_column.with_style("width", layout_config.main_width.clone());
                let mut sidebar_column = RenderNode::element("aside", NodeRole::Sidebar).with_children(sidebar);
                if let Some(width) = &layout_config.sidebar_width {
                    sidebar_column = sidebar_column.with_style("width", width.clone());
                }
                if let Some(background) = layout_config
                    .sidebar_background
                    .as_ref()
                    .or(config.colors.background.sidebar.as_ref())
                {
                    sidebar_column = sidebar_column.with_style("background", background.clone());
                }
                if let Some(padding) = &layout_config.sidebar_padding {
                    sidebar_column = sidebar_column.with_style("padding", padding.clone());
                }

                let ordered = if layout == LayoutType::TwoColumnLeft {
                    [sidebar_column, main_column]
                } else {
                    [main_column, sidebar_column]
                };
                RenderNode::element("div", NodeRole::Columns)
                    .with_style("display", "flex")
                    .with_style("gap", layout_config.column_gap.clone().unwrap_or_else(|| "24px".to_string()))
                    .with_children(ordered)
            }
        };

        let root = RenderNode::element("div", NodeRole::Page)
            .with_attr("data-template", config.id.clone())
            .with_attr("data-layout", layout_name(config.layout.kind))
            .with_style("font-family", config.font_family.primary.clone())
            .with_style("padding", config.spacing.page_padding.to_css())
            .with_style("background", config.colors.background.page.clone())
            .with_style("color", config.colors.text.primary.clone())
            .with_opt_child(header)
            .with_child(body);

        RenderDocument {
            root,
            css_variables: config.css_variables(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn layout_name(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::SingleColumn => "single-column",
        LayoutType::TwoColumnLeft => "two-column-left",
        LayoutType::TwoColumnRight => "two-column-right",
    }
}

fn heading(ctx: &SectionContext<'_>) -> RenderNode {
    let config = &ctx.config.section_heading;
    let border = config
        .border_color
        .clone()
        .unwrap_or_else(|| ctx.accent().to_string());

    // custom sections carry their own title, editable in place
    let entry = match ctx.kind {
        SectionType::Custom => ctx.document.custom_section(&ctx.descriptor.id),
        _ => None,
    };
    let content = entry
        .and_then(|(_, entry)| entry.text_field("title"))
        .unwrap_or_else(|| ctx.descriptor.display_title());
    let edit = entry
        .map(|(index, _)| EditAddress::key(CUSTOM_SECTIONS).index(index).field("title"))
        .and_then(|address| ctx.action(EditAction::SetField { address }));

    let title = RenderNode::Field {
        role: TextRole::SectionHeading,
        content: content.to_string(),
        styles: ctx.styles(TextRole::SectionHeading),
        href: None,
        placeholder: None,
        edit,
    };
    let node = RenderNode::element("h2", NodeRole::Heading)
        .with_style("margin-bottom", config.margin_bottom.clone())
        .with_child(title);

    match config.style {
        HeadingStyle::Simple | HeadingStyle::Unknown => node,
        HeadingStyle::Underline => node
            .with_style("border-bottom", format!("1px solid {}", border))
            .with_style("padding-bottom", "4px"),
        HeadingStyle::LeftBar => node
            .with_style("border-left", format!("3px solid {}", border))
            .with_style("padding-left", "8px"),
        HeadingStyle::Background => node
            .with_style("background", ctx.config.colors.background.accent.clone())
            .with_style("padding", "4px 8px"),
        HeadingStyle::Minimal => node.with_style("color", ctx.config.colors.text.muted.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{AllowAll, LockedFields};
    use serde_json::json;
    use vitae_model::{Column, StyleSettings, PERSONAL_INFO};

    fn personal_address(key: &str) -> EditAddress {
        EditAddress::key(PERSONAL_INFO).field(key)
    }

    fn document() -> Document {
        Document::from_json(json!({
            "personalInfo": {
                "fullName": "Ada Lovelace",
                "title": "Engineer",
                "email": "ada@example.com",
                "summary": "Analytical engine programmer."
            },
            "experience": [
                {"id": "e1", "position": "Engineer", "company": "Babbage & Co", "startDate": "1842-01", "bulletPoints": ["Wrote the first program"]}
            ],
            "skills": [
                {"id": "s1", "name": "Mathematics", "category": "Science"}
            ]
        }))
        .unwrap()
    }

    fn render(document: &Document, config: &TemplateConfig, options: &StyleOptions, mode: RenderMode) -> RenderDocument {
        Renderer::new().render(document, config, options, mode, &AllowAll, &VariantOverrides::new())
    }

    fn section_keys(root: &RenderNode) -> Vec<String> {
        root.find_role(NodeRole::Section)
            .into_iter()
            .filter_map(|s| s.key().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_header_first_and_empty_sections_skipped() {
        let output = render(&document(), &TemplateConfig::default(), &StyleOptions::default(), RenderMode::Display);
        let children = output.root.children();

        assert_eq!(children[0].role(), Some(NodeRole::Header));
        // education has no entries in display mode
        assert_eq!(section_keys(&output.root), vec!["summary", "experience", "skills"]);
    }

    #[test]
    fn test_editable_mode_keeps_empty_sections() {
        let output = render(&document(), &TemplateConfig::default(), &StyleOptions::default(), RenderMode::Editable);
        assert_eq!(
            section_keys(&output.root),
            vec!["summary", "experience", "education", "skills"]
        );
        assert!(output
            .root
            .edit_actions()
            .contains(&&EditAction::AddItem { list: EditAddress::key("education") }));
    }

    #[test]
    fn test_visibility_toggle_hides_section() {
        let mut settings = StyleSettings::default();
        settings.set_section_visible(SectionType::Skills, false);

        let output = render(&document(), &TemplateConfig::default(), &settings.snapshot(), RenderMode::Display);
        assert_eq!(section_keys(&output.root), vec!["summary", "experience"]);
    }

    #[test]
    fn test_unknown_variant_renders_default() {
        let mut config = TemplateConfig::default();
        config.skills.variant = "holographic".to_string();

        let output = render(&document(), &config, &StyleOptions::default(), RenderMode::Display);
        let skills = output
            .root
            .find_role(NodeRole::Section)
            .into_iter()
            .find(|s| s.key() == Some("skills"))
            .cloned()
            .unwrap();
        match skills {
            RenderNode::Element { attributes, .. } => {
                assert_eq!(attributes.get("data-variant").map(String::as_str), Some("pills"))
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_override_wins_over_descriptor() {
        let mut config = TemplateConfig::default();
        config.sections = config
            .sections
            .into_iter()
            .map(|s| if s.kind == SectionType::Skills { s.with_variant("list") } else { s })
            .collect();
        let mut overrides = VariantOverrides::new();
        overrides.insert(SectionType::Skills, "category-lines".to_string());

        let output = Renderer::new().render(
            &document(),
            &config,
            &StyleOptions::default(),
            RenderMode::Display,
            &AllowAll,
            &overrides,
        );
        let text = output.root.text_content().join("");
        assert!(text.contains("Science: "));
    }

    #[test]
    fn test_locked_fields_have_no_edit_action() {
        let hooks = LockedFields::new([personal_address("fullName")]);
        let output = Renderer::new().render(
            &document(),
            &TemplateConfig::default(),
            &StyleOptions::default(),
            RenderMode::Editable,
            &hooks,
            &VariantOverrides::new(),
        );
        let actions = output.root.edit_actions();

        assert!(!actions.contains(&&EditAction::SetField { address: personal_address("fullName") }));
        assert!(actions.contains(&&EditAction::SetField { address: personal_address("title") }));
    }

    #[test]
    fn test_two_column_left_puts_sidebar_first() {
        let mut config = TemplateConfig::default();
        config.layout = vitae_model::LayoutConfig::two_column(LayoutType::TwoColumnLeft);
        config.sections = config
            .sections
            .into_iter()
            .map(|s| if s.kind == SectionType::Skills { s.in_column(Column::Sidebar) } else { s })
            .collect();

        let output = render(&document(), &config, &StyleOptions::default(), RenderMode::Display);
        let columns = output.root.find_role(NodeRole::Columns);
        let roles: Vec<_> = columns[0].children().iter().map(RenderNode::role).collect();
        assert_eq!(roles, vec![Some(NodeRole::Sidebar), Some(NodeRole::Main)]);
        assert_eq!(section_keys(&columns[0].children()[0]), vec!["skills"]);
    }

    #[test]
    fn test_missing_header_descriptor_is_synthesized() {
        let mut config = TemplateConfig::default();
        config.sections.retain(|s| !s.is_header());

        let output = render(&document(), &config, &StyleOptions::default(), RenderMode::Display);
        assert_eq!(output.root.children()[0].role(), Some(NodeRole::Header));
    }

    fn custom_document() -> Document {
        Document::from_json(json!({
            "personalInfo": {"fullName": "Ada Lovelace"},
            "customSections": [
                {"id": "c1", "title": "Publications", "items": [{"id": "p1", "title": "Notes on the Engine", "date": "1843"}]},
                {"id": "c2", "title": "Patents", "items": [{"id": "p2", "title": "Loom card reader"}]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_custom_descriptor_renders_its_own_entry() {
        let mut config = TemplateConfig::default();
        config.sections.push(SectionDescriptor::new(SectionType::Custom, "c1", 20));
        config.sections.push(SectionDescriptor::new(SectionType::Custom, "c2", 21));

        let output = render(&custom_document(), &config, &StyleOptions::default(), RenderMode::Editable);
        let text = output.root.text_content().join("|");
        assert_eq!(text.matches("Notes on the Engine").count(), 1);
        assert_eq!(text.matches("Loom card reader").count(), 1);
        assert_eq!(text.matches("Publications").count(), 1);
        assert_eq!(text.matches("Patents").count(), 1);

        let actions = output.root.edit_actions();
        let item_title = EditAddress::parse("customSections.1.items.0.title").unwrap();
        assert!(actions.contains(&&EditAction::SetField { address: item_title }));
        let heading = EditAddress::parse("customSections.0.title").unwrap();
        assert!(actions.contains(&&EditAction::SetField { address: heading }));
        assert!(actions.contains(&&EditAction::AddItem {
            list: EditAddress::parse("customSections.1.items").unwrap()
        }));
    }

    #[test]
    fn test_section_data_is_the_bound_entry() {
        let document = custom_document();
        let c2 = SectionDescriptor::new(SectionType::Custom, "c2", 20);
        let data = Renderer::section_data(&document, &c2);

        assert_eq!(data.len(), 2);
        assert!(Node::same(&data[0], &document.list(CUSTOM_SECTIONS)[1]));
        assert_eq!(data[1], Node::from(1_i64));

        let missing = SectionDescriptor::new(SectionType::Custom, "c9", 22);
        assert!(Renderer::section_data(&document, &missing).is_empty());
    }

    #[test]
    fn test_default_config_places_custom_sections() {
        let output = render(&custom_document(), &TemplateConfig::default(), &StyleOptions::default(), RenderMode::Display);
        let keys = section_keys(&output.root);
        assert_eq!(keys, vec!["c1", "c2"]);

        let text = output.root.text_content().join("|");
        assert_eq!(text.matches("Notes on the Engine").count(), 1);
        assert_eq!(text.matches("Loom card reader").count(), 1);
    }

    #[test]
    fn test_custom_descriptor_without_entry_is_skipped() {
        let mut config = TemplateConfig::default();
        config.sections.push(SectionDescriptor::new(SectionType::Custom, "awards", 20));

        let output = render(&document(), &config, &StyleOptions::default(), RenderMode::Editable);
        assert!(!section_keys(&output.root).contains(&"awards".to_string()));
    }
}
