//! Error types for the travel graph engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid {field}: {value} (expected {expected})")]
    Validation {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("node {0:?} already exists")]
    DuplicateNode(String),

    #[error("unknown {endpoint} node {id:?}")]
    UnknownNode { endpoint: Endpoint, id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
