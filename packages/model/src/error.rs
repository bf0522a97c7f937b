use crate::section::SectionType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Duplicate section descriptor ({kind}, '{id}')")]
    DuplicateSection { kind: SectionType, id: String },

    #[error("Template overrides must be a JSON object, got {0}")]
    OverridesNotAnObject(&'static str),

    #[error("Invalid template configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Unknown template preset: {0}")]
    UnknownPreset(String),
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document root must be a JSON object, got {0}")]
    RootNotAnObject(&'static str),

    #[error("'{key}' must be a {expected}, got {found}")]
    UnexpectedShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
