use crate::{compile_fragment, compile_to_html, CompileError, CompileOptions};
use serde_json::json;
use std::collections::BTreeMap;
use vitae_evaluator::{AllowAll, NodeRole, RenderDocument, RenderMode, RenderNode, Renderer, VariantOverrides};
use vitae_model::{Document, StyleOptions, TemplateConfig};

fn render(document: serde_json::Value, mode: RenderMode) -> RenderDocument {
    let document = Document::from_json(document).expect("Failed to load document");
    Renderer::new().render(
        &document,
        &TemplateConfig::default(),
        &StyleOptions::default(),
        mode,
        &AllowAll,
        &VariantOverrides::new(),
    )
}

fn resume() -> serde_json::Value {
    json!({
        "personalInfo": {"fullName": "Ada Lovelace", "email": "ada@example.com"},
        "experience": [{"id": "e1", "title": "Analyst", "company": "Engines & Co"}]
    })
}

#[test]
fn test_compile_page_shell() {
    let html = compile_to_html(&render(resume(), RenderMode::Display), CompileOptions::default())
        .expect("Failed to compile");

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Resume</title>"));
    assert!(html.contains(":root {"));
    assert!(html.contains("--resume-"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("href=\"mailto:ada@example.com\""));
    assert!(html.contains("</html>"));
}

#[test]
fn test_content_is_escaped() {
    let mut document = resume();
    document["personalInfo"]["fullName"] = json!("Ada <script>alert('x')</script>");
    let html = compile_to_html(&render(document, RenderMode::Display), CompileOptions::default())
        .expect("Failed to compile");

    assert!(!html.contains("<script>"));
    assert!(html.contains("Ada &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("Engines &amp; Co"));
}

#[test]
fn test_display_render_has_no_edit_hooks() {
    let html = compile_to_html(&render(resume(), RenderMode::Display), CompileOptions::default())
        .expect("Failed to compile");

    assert!(!html.contains("data-edit"));
    assert!(!html.contains("<button"));
}

#[test]
fn test_editable_render_carries_edit_actions() {
    let output = render(resume(), RenderMode::Editable);

    let html = compile_to_html(&output, CompileOptions::default()).expect("Failed to compile");
    assert!(html.contains("data-edit=\"{&quot;kind&quot;:&quot;setField&quot;"));
    assert!(html.contains("data-placeholder="));
    assert!(html.contains("class=\"vitae-affordance\""));

    let options = CompileOptions {
        edit_hooks: false,
        ..Default::default()
    };
    let html = compile_to_html(&output, options).expect("Failed to compile");
    assert!(!html.contains("data-edit"));
    assert!(!html.contains("<button"));
}

#[test]
fn test_compile_self_closing_tags() {
    let node = RenderNode::element("img", NodeRole::Photo)
        .with_attr("src", "photo.jpg")
        .with_attr("alt", "Photo");
    let html = compile_fragment(&node, CompileOptions::default()).expect("Failed to compile");

    assert_eq!(html, "<img class=\"vitae-photo\" alt=\"Photo\" src=\"photo.jpg\" />\n");
}

#[test]
fn test_compact_output() {
    let node = RenderNode::element("div", NodeRole::Row)
        .with_child(RenderNode::text("a"))
        .with_child(RenderNode::text("b"));
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let html = compile_fragment(&node, options).expect("Failed to compile");

    assert_eq!(html, "<div class=\"vitae-row\">ab</div>");
}

#[test]
fn test_meter_width() {
    let node = RenderNode::Meter {
        value: 4.0,
        max: 5.0,
        styles: BTreeMap::new(),
        edit: None,
    };
    let html = compile_fragment(&node, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("role=\"meter\""));
    assert!(html.contains("width: 80%;"));
}

#[test]
fn test_invalid_tag_rejected() {
    let node = RenderNode::element("div onclick", NodeRole::Row);
    let result = compile_fragment(&node, CompileOptions::default());

    assert!(matches!(result, Err(CompileError::InvalidTag(_))));
}

#[test]
fn test_inline_styles_toggle() {
    let node = RenderNode::element("div", NodeRole::Item).with_style("color", "#333");

    let styled = compile_fragment(&node, CompileOptions::default()).expect("Failed to compile");
    assert!(styled.contains("style=\"color: #333;\""));

    let options = CompileOptions {
        inline_styles: false,
        ..Default::default()
    };
    let plain = compile_fragment(&node, options).expect("Failed to compile");
    assert!(!plain.contains("style="));
}
