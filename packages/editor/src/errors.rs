//! Error types for the editor

use thiserror::Error;
use vitae_model::{AddressError, ConfigError, DocumentError, EditAddress};

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid payload for {action}: {reason}")]
    InvalidPayload { action: &'static str, reason: String },

    #[error("Editing '{0}' is not allowed")]
    NotEditable(EditAddress),

    #[error("No pending mutation '{0}'")]
    UnknownPending(String),
}

impl From<crate::resolver::PathError> for EditorError {
    fn from(e: crate::resolver::PathError) -> Self {
        EditorError::Mutation(e.into())
    }
}
