//! Mutation chains, undo/redo sequences and structural sharing

use serde_json::json;
use vitae_editor::{lists, set, Mutation, MutationError, UndoStack};
use vitae_model::{Document, EditAddress, Node};

fn address(raw: &str) -> EditAddress {
    EditAddress::parse(raw).unwrap()
}

fn resume() -> Document {
    Document::from_json_str(include_str!("fixtures/resume.json")).unwrap()
}

#[test]
fn test_set_field_keeps_sibling_lists() {
    let doc = Document::from_json(json!({
        "experience": [{"id": "e1", "title": "Eng"}],
        "skills": [{"id": "s1", "name": "Rust"}]
    }))
    .unwrap();

    let updated = set(&doc, &address("experience.0.title"), Node::text("Senior Eng")).unwrap();

    assert_eq!(
        updated.to_json()["experience"],
        json!([{"id": "e1", "title": "Senior Eng"}])
    );
    assert!(Node::same(doc.get("skills").unwrap(), updated.get("skills").unwrap()));
}

#[test]
fn test_add_then_remove_restores_skills() {
    let doc = resume();
    let skills = EditAddress::key("skills");

    let added = lists::add_item(&doc, &skills, Node::from(json!({"id": "s9", "name": "Go"}))).unwrap();
    let removed = lists::remove_item(&added, &skills, "s9").unwrap();

    assert_eq!(removed.to_json()["skills"], doc.to_json()["skills"]);
}

#[test]
fn test_edit_chain_undoes_in_reverse() {
    let original = resume();
    let mut stack = UndoStack::new();

    let chain = vec![
        Mutation::SetField {
            address: address("experience.0.position"),
            value: Node::text("Lead Analyst"),
        },
        Mutation::InsertValue {
            list: address("experience.0.bulletPoints"),
            index: 2,
            value: Node::text("Diagrams"),
        },
        Mutation::MoveItem {
            list: address("experience"),
            id: "e2".to_string(),
            to_index: 0,
        },
        Mutation::RemoveItem {
            list: address("skills"),
            id: "s2".to_string(),
        },
        Mutation::AddItem {
            list: address("awards"),
            item: Node::from(json!({"id": "a2", "title": "Medal"})),
        },
    ];

    let mut doc = original.clone();
    for mutation in &chain {
        doc = stack.apply(mutation, &doc).unwrap();
    }
    let edited = doc.clone();

    assert_eq!(edited.list("experience")[0].id(), Some("e2"));
    assert_eq!(
        edited.to_json()["experience"][1]["bulletPoints"],
        json!(["Note G", "Bernoulli numbers", "Diagrams"])
    );
    assert_eq!(edited.list("skills").len(), 2);

    while let Some(previous) = stack.undo(&doc).unwrap() {
        doc = previous;
    }
    assert_eq!(doc.to_json(), original.to_json());
    assert_eq!(stack.redo_levels(), chain.len());

    while let Some(next) = stack.redo(&doc).unwrap() {
        doc = next;
    }
    assert_eq!(doc.to_json(), edited.to_json());
}

#[test]
fn test_batch_undoes_as_one_step() {
    let original = resume();
    let mut stack = UndoStack::new();

    stack.begin_batch();
    stack.set_batch_description("Rename contact details");
    let mut doc = original.clone();
    for (key, value) in [("email", "ada@lovelace.dev"), ("phone", "555"), ("website", "ada.dev")] {
        let mutation = Mutation::SetField {
            address: address(&format!("personalInfo.{}", key)),
            value: Node::text(value),
        };
        doc = stack.apply(&mutation, &doc).unwrap();
    }
    stack.end_batch();

    assert_eq!(stack.undo_levels(), 1);
    let restored = stack.undo(&doc).unwrap().unwrap();

    // website was absent, so undo removes the key again
    assert_eq!(restored.personal_info().get("website"), None);
    assert_eq!(restored.to_json(), original.to_json());
    assert_eq!(restored.personal_info().text_field("email"), Some("ada@example.com"));
    assert_eq!(restored.personal_info().text_field("phone"), Some("+44 20 7946 0000"));
}

#[test]
fn test_failed_mutation_leaves_document_untouched() {
    let doc = resume();
    let before = doc.to_json();

    let duplicate = Mutation::AddItem {
        list: address("skills"),
        item: Node::from(json!({"id": "s1", "name": "Again"})),
    };
    assert!(matches!(duplicate.apply(&doc), Err(MutationError::DuplicateId { .. })));

    let out_of_range = Mutation::InsertItem {
        list: address("skills"),
        index: 9,
        item: Node::from(json!({"id": "s9"})),
    };
    assert!(matches!(
        out_of_range.apply(&doc),
        Err(MutationError::IndexOutOfRange { index: 9, len: 3, .. })
    ));

    assert_eq!(doc.to_json(), before);
}

#[test]
fn test_untouched_sections_share_structure_across_chain() {
    let doc = resume();
    let mut current = doc.clone();
    for i in 0..5 {
        current = Mutation::SetField {
            address: address("experience.0.description"),
            value: Node::text(format!("Revision {}", i)),
        }
        .apply(&current)
        .unwrap();
    }

    for key in ["education", "skills", "projects", "personalInfo", "customSections"] {
        assert!(
            Node::same(doc.get(key).unwrap(), current.get(key).unwrap()),
            "{} was copied",
            key
        );
    }
    assert!(Node::same(&doc.list("experience")[1], &current.list("experience")[1]));
}

#[test]
fn test_mutations_from_json() -> anyhow::Result<()> {
    let raw = json!([
        {"type": "setField", "address": "personalInfo.fullName", "value": "Augusta Ada King"},
        {"type": "removeValue", "list": "projects.0.technologies", "index": 0}
    ]);
    let mutations: Vec<Mutation> = serde_json::from_value(raw)?;

    let doc = mutations.iter().try_fold(resume(), |doc, m| m.apply(&doc))?;

    assert_eq!(doc.personal_info().text_field("fullName"), Some("Augusta Ada King"));
    assert_eq!(doc.to_json()["projects"][0]["technologies"], json!(["Engine"]));
    Ok(())
}
