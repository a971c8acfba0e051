// src/error.rs
use std::io;

use thiserror::Error;

/// A candidate could not be assembled from its raw fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("missing expected field: {field}. Had [{}]", had.join(", "))]
    MissingRequiredField { field: &'static str, had: Vec<String> },
}

impl CandidateError {
    pub fn missing(field: &'static str, had: Vec<String>) -> Self {
        CandidateError::MissingRequiredField { field, had }
    }

    /// Name of the field that was absent or unresolvable.
    pub fn field(&self) -> &'static str {
        match self {
            CandidateError::MissingRequiredField { field, .. } => field,
        }
    }
}

/// Failure to read a source file at all. Per-record problems never surface
/// here; those are logged and skipped by the readers.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("expected a list of candidates in {0}")]
    NotASequence(String),
}
