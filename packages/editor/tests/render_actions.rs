//! Every edit action an editable render emits must dispatch cleanly

use vitae_editor::{EditSession, Pipeline};
use vitae_evaluator::{AllowAll, EditAction, RenderMode, Renderer, VariantOverrides};
use vitae_model::{presets, Document, Node, SectionDescriptor, SectionType, StyleOptions, TemplateConfig};

fn resume() -> Document {
    Document::from_json_str(include_str!("fixtures/resume.json")).unwrap()
}

fn every_section() -> TemplateConfig {
    let mut config = TemplateConfig::default();
    config.sections = SectionType::ALL
        .into_iter()
        .enumerate()
        .map(|(order, kind)| SectionDescriptor::new(kind, section_id(kind), order as i32))
        .collect();
    config
}

/// Descriptor id per type; the custom one is bound to the fixture's `cs1` entry
fn section_id(kind: SectionType) -> &'static str {
    match kind {
        SectionType::Custom => "cs1",
        kind => kind.as_str(),
    }
}

fn payload(action: &EditAction) -> Node {
    match action {
        EditAction::SetField { .. } => Node::text("edited"),
        EditAction::MoveItem { .. } => Node::from(0i64),
        _ => Node::Null,
    }
}

#[test]
fn test_every_edit_action_dispatches() {
    let document = resume();
    let output = Renderer::new().render(
        &document,
        &every_section(),
        &StyleOptions::default(),
        RenderMode::Editable,
        &AllowAll,
        &VariantOverrides::new(),
    );

    let actions = output.root.edit_actions();
    assert!(actions.len() > 50);

    for action in actions {
        let mut session = EditSession::new("client", document.clone());
        let result = session.dispatch(action, payload(action));
        assert!(result.is_ok(), "{:?} failed: {:?}", action, result.err());
    }
}

#[test]
fn test_presets_render_through_pipeline_after_edits() {
    for id in presets::ids() {
        let config = presets::get(id).unwrap();
        let mut pipeline = Pipeline::new(config, RenderMode::Editable);
        let mut session = EditSession::new("client", resume());
        pipeline.full_render(&session);

        let add = EditAction::AddItem {
            list: "interests".parse().unwrap(),
        };
        let result = pipeline
            .dispatch(&mut session, &add, Node::from(serde_json::json!({"name": "Chess"})))
            .unwrap();

        assert!(
            !result.rerendered.iter().any(|id| id == "header" || id == "experience"),
            "{} re-rendered untouched sections: {:?}",
            id,
            result.rerendered
        );
    }
}
