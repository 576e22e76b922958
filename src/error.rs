use thiserror::Error;

use crate::metadata::{MetadataKind, Subject};

pub type Result<T> = std::result::Result<T, RoutemarkError>;

#[derive(Debug, Error)]
pub enum RoutemarkError {
    #[error("Invalid HTTP verb: {verb:?}")]
    InvalidVerb { verb: String },

    #[error("Metadata '{kind}' on {subject} is not a {expected}")]
    MetadataTypeMismatch {
        kind: MetadataKind,
        subject: Subject,
        expected: &'static str,
    },

    #[error("Failed to serialize routes: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RoutemarkError {
    pub(crate) fn invalid_verb(verb: impl Into<String>) -> Self {
        Self::InvalidVerb { verb: verb.into() }
    }
}
