use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;
use vitae_evaluator::{EditAction, RenderDocument, RenderNode};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTag(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    #[error("Could not encode edit action: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Include inline styles
    pub inline_styles: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document title
    pub title: String,
    /// Emit `data-edit` attributes and affordance buttons for editable renders
    pub edit_hooks: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_styles: true,
            pretty: true,
            indent: "  ".to_string(),
            title: "Resume".to_string(),
            edit_hooks: true,
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered resume to a standalone HTML page
pub fn compile_to_html(document: &RenderDocument, options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(document, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    compile_node(&document.root, &mut ctx)?;
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    let html = ctx.get_output();
    debug!(bytes = html.len(), "Compiled resume to HTML");
    Ok(html)
}

/// Compile only the render tree, without the page shell
pub fn compile_fragment(node: &RenderNode, options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    compile_node(node, &mut ctx)?;
    Ok(ctx.get_output())
}

fn compile_head(document: &RenderDocument, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    if !document.css_variables.is_empty() {
        ctx.add_line("<style>");
        ctx.indent();
        ctx.add_line(":root {");
        ctx.indent();
        for (name, value) in &document.css_variables {
            ctx.add_line(&format!("{}: {};", name, escape_css(value)));
        }
        ctx.dedent();
        ctx.add_line("}");
        ctx.dedent();
        ctx.add_line("</style>");
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(node: &RenderNode, ctx: &mut Context) -> Result<(), CompileError> {
    match node {
        RenderNode::Element {
            tag,
            role,
            attributes,
            styles,
            children,
            key,
        } => {
            let mut attrs = vec![("class".to_string(), format!("vitae-{}", serde_name(role)?))];
            if let Some(key) = key {
                attrs.push(("data-key".to_string(), key.clone()));
            }
            attrs.extend(attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
            compile_tag(tag, &attrs, styles, children, ctx)
        }

        RenderNode::Field {
            role,
            content,
            styles,
            href,
            placeholder,
            edit,
        } => {
            let tag = if href.is_some() { "a" } else { "span" };
            let mut attrs = vec![(
                "class".to_string(),
                format!("vitae-field vitae-{}", serde_name(role)?),
            )];
            if let Some(href) = href {
                attrs.push(("href".to_string(), href.clone()));
            }
            if let Some(placeholder) = placeholder {
                attrs.push(("data-placeholder".to_string(), placeholder.clone()));
            }
            push_edit(&mut attrs, edit.as_ref(), ctx)?;

            let open = open_tag(tag, &attrs, styles, ctx)?;
            ctx.add_line(&format!("{}{}</{}>", open, escape_html(content), tag));
            Ok(())
        }

        RenderNode::Text { content } => {
            ctx.add_line(&escape_html(content));
            Ok(())
        }

        RenderNode::Meter {
            value,
            max,
            styles,
            edit,
        } => {
            let percent = if *max > 0.0 { (value / max * 100.0).clamp(0.0, 100.0) } else { 0.0 };
            let mut attrs = vec![
                ("class".to_string(), "vitae-meter".to_string()),
                ("role".to_string(), "meter".to_string()),
                ("aria-valuenow".to_string(), value.to_string()),
                ("aria-valuemax".to_string(), max.to_string()),
            ];
            push_edit(&mut attrs, edit.as_ref(), ctx)?;

            let open = open_tag("span", &attrs, styles, ctx)?;
            ctx.add_line(&format!(
                "{}<span class=\"vitae-meter-fill\" style=\"width: {}%;\"></span></span>",
                open,
                (percent * 100.0).round() / 100.0
            ));
            Ok(())
        }

        RenderNode::Affordance { action, label } => {
            if !ctx.options.edit_hooks {
                return Ok(());
            }
            let attrs = vec![
                ("type".to_string(), "button".to_string()),
                ("class".to_string(), "vitae-affordance".to_string()),
                ("data-edit".to_string(), serde_json::to_string(action)?),
            ];
            let open = open_tag("button", &attrs, &BTreeMap::new(), ctx)?;
            ctx.add_line(&format!("{}{}</button>", open, escape_html(label)));
            Ok(())
        }
    }
}

fn compile_tag(
    name: &str,
    attributes: &[(String, String)],
    styles: &BTreeMap<String, String>,
    children: &[RenderNode],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    let open = open_tag(name, attributes, styles, ctx)?;

    // Self-closing tags
    if children.is_empty() && is_self_closing(name) {
        ctx.add_line(&format!("{} />", open.trim_end_matches('>')));
        return Ok(());
    }

    if children.is_empty() {
        ctx.add_line(&format!("{}</{}>", open, name));
        return Ok(());
    }

    ctx.add_line(&open);
    ctx.indent();
    for child in children {
        compile_node(child, ctx)?;
    }
    ctx.dedent();
    ctx.add_line(&format!("</{}>", name));

    Ok(())
}

fn open_tag(
    name: &str,
    attributes: &[(String, String)],
    styles: &BTreeMap<String, String>,
    ctx: &Context,
) -> Result<String, CompileError> {
    if !is_valid_name(name) {
        return Err(CompileError::InvalidTag(name.to_string()));
    }

    let mut out = format!("<{}", name);
    for (attr_name, value) in attributes {
        if !is_valid_name(attr_name) {
            return Err(CompileError::InvalidAttribute(attr_name.clone()));
        }
        out.push_str(&format!(" {}=\"{}\"", attr_name, escape_html(value)));
    }

    if ctx.options.inline_styles && !styles.is_empty() {
        let declarations: Vec<String> = styles
            .iter()
            .map(|(key, value)| format!("{}: {};", key, escape_css(value)))
            .collect();
        out.push_str(&format!(" style=\"{}\"", escape_html(&declarations.join(" "))));
    }

    out.push('>');
    Ok(out)
}

fn push_edit(attrs: &mut Vec<(String, String)>, edit: Option<&EditAction>, ctx: &Context) -> Result<(), CompileError> {
    if let (true, Some(action)) = (ctx.options.edit_hooks, edit) {
        attrs.push(("data-edit".to_string(), serde_json::to_string(action)?));
    }
    Ok(())
}

/// Serialized name of a unit enum variant (`item-title`, `section`, ...)
fn serde_name(value: &impl Serialize) -> Result<String, CompileError> {
    let name = serde_json::to_value(value)?;
    Ok(name.as_str().unwrap_or_default().to_string())
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip what would end a declaration or the style block
fn escape_css(value: &str) -> String {
    value.replace(|c: char| matches!(c, ';' | '{' | '}'), "").replace("</", "")
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
