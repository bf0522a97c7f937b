/// Determinism tests - rendering the same input twice must produce the
/// same tree and the same serialized bytes.
use vitae_evaluator::{AllowAll, RenderDocument, RenderMode, Renderer, VariantOverrides};
use vitae_model::{presets, Document, StyleOptions, TemplateConfig};

fn document() -> Document {
    Document::from_json_str(include_str!("fixtures/resume.json")).expect("fixture parses")
}

fn render_many(config: &TemplateConfig, mode: RenderMode) -> Vec<RenderDocument> {
    let document = document();
    (0..10)
        .map(|_| {
            Renderer::new().render(
                &document,
                config,
                &StyleOptions::default(),
                mode,
                &AllowAll,
                &VariantOverrides::new(),
            )
        })
        .collect()
}

#[test]
fn test_render_determinism_default_template() {
    let results = render_many(&TemplateConfig::default(), RenderMode::Display);

    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Render {} differs from render 0", i);
    }
}

#[test]
fn test_render_determinism_every_preset_editable() {
    for id in presets::ids() {
        let config = presets::get(id).unwrap();
        let results = render_many(&config, RenderMode::Editable);

        let first = serde_json::to_string(&results[0]).unwrap();
        for (i, result) in results.iter().enumerate().skip(1) {
            assert_eq!(
                first,
                serde_json::to_string(result).unwrap(),
                "Preset {} render {} serialized differently",
                id,
                i
            );
        }
    }
}

#[test]
fn test_render_does_not_touch_document() {
    let document = document();
    let before = document.to_json();

    Renderer::new().render(
        &document,
        &TemplateConfig::default(),
        &StyleOptions::default(),
        RenderMode::Editable,
        &AllowAll,
        &VariantOverrides::new(),
    );

    assert_eq!(document.to_json(), before);
}
