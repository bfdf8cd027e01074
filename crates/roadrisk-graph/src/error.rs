//! Graph-subsystem error type.

use thiserror::Error;

use roadrisk_core::NodeId;

/// Errors produced by `roadrisk-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge references unknown node {0}")]
    UnknownNode(NodeId),

    #[error("duplicate node {0}")]
    DuplicateNode(NodeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
