use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use vitae_evaluator::{AllowAll, RenderMode, Renderer, VariantOverrides};
use vitae_model::{presets, Document, StyleOptions, TemplateConfig};

fn sample_document(entries: usize) -> Document {
    let experience: Vec<_> = (0..entries)
        .map(|i| {
            json!({
                "id": format!("e{}", i),
                "position": "Software Engineer",
                "company": "Acme",
                "startDate": "2020-01",
                "endDate": "2023-06",
                "bulletPoints": ["Built things", "Fixed things", "Shipped things"]
            })
        })
        .collect();
    let skills: Vec<_> = (0..entries * 2)
        .map(|i| json!({"id": format!("s{}", i), "name": format!("Skill {}", i), "category": if i % 2 == 0 { "Languages" } else { "Tools" }, "level": 4}))
        .collect();

    Document::from_json(json!({
        "personalInfo": {
            "fullName": "Jordan Example",
            "title": "Engineer",
            "email": "jordan@example.com",
            "summary": "Builds reliable systems."
        },
        "experience": experience,
        "skills": skills
    }))
    .unwrap()
}

fn render_display(c: &mut Criterion) {
    let renderer = Renderer::new();
    let document = sample_document(5);
    let config = TemplateConfig::default();
    let options = StyleOptions::default();
    let overrides = VariantOverrides::new();

    c.bench_function("render_display_default", |b| {
        b.iter(|| {
            renderer.render(
                black_box(&document),
                &config,
                &options,
                RenderMode::Display,
                &AllowAll,
                &overrides,
            )
        })
    });
}

fn render_editable_large(c: &mut Criterion) {
    let renderer = Renderer::new();
    let document = sample_document(40);
    let config = presets::get("modern-sidebar").unwrap();
    let options = StyleOptions::default();
    let overrides = VariantOverrides::new();

    c.bench_function("render_editable_large", |b| {
        b.iter(|| {
            renderer.render(
                black_box(&document),
                &config,
                &options,
                RenderMode::Editable,
                &AllowAll,
                &overrides,
            )
        })
    });
}

criterion_group!(benches, render_display, render_editable_large);
criterion_main!(benches);
