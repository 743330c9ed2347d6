//! Error types for the resolution pipeline

use thiserror::Error;

/// Main error type for the resolution pipeline
///
/// Only `InvalidTokenTree`, `InvalidIdentifierTable` and `InvalidConfig` are
/// allowed to stop a run. Everything else is caught per entity or per field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Missing localization key: {0}")]
    MissingLocalizationKey(String),

    #[error("Missing identifier for {0}")]
    MissingIdentifier(String),

    #[error("Malformed value list in {field}: {value:?}")]
    MalformedValueList { field: String, value: String },

    #[error("Malformed scalar in {field}: {value:?}")]
    MalformedScalar { field: String, value: String },

    #[error("Unresolved placeholder: {0}")]
    UnresolvedPlaceholder(String),

    #[error("Structural anomaly: {0}")]
    StructuralAnomaly(String),

    #[error("Missing node {name} under {parent}")]
    MissingNode { parent: String, name: String },

    #[error("Invalid token tree: {0}")]
    InvalidTokenTree(String),

    #[error("Invalid identifier table: {0}")]
    InvalidIdentifierTable(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<ResolveError> for pyo3::PyErr {
    fn from(err: ResolveError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            ResolveError::MissingLocalizationKey(_)
            | ResolveError::MissingIdentifier(_)
            | ResolveError::MissingNode { .. } => PyKeyError::new_err(err.to_string()),
            ResolveError::MalformedValueList { .. }
            | ResolveError::MalformedScalar { .. }
            | ResolveError::InvalidTokenTree(_)
            | ResolveError::InvalidIdentifierTable(_)
            | ResolveError::InvalidConfig(_)
            | ResolveError::DeserializationError(_) => PyValueError::new_err(err.to_string()),
            ResolveError::UnresolvedPlaceholder(_) | ResolveError::StructuralAnomaly(_) => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

/// Result type alias for the resolution pipeline
pub type Result<T> = std::result::Result<T, ResolveError>;
