//! Engine-facade error type.

use thiserror::Error;

use roadrisk_graph::GraphError;
use roadrisk_score::ScoreError;

/// Errors produced by the [`RouteEngine`](crate::RouteEngine) facade.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No graph is loaded — either nothing was loaded yet or the last load
    /// failed.  Every graph-dependent operation reports this instead of
    /// panicking on a missing reference.
    #[error("no graph loaded")]
    GraphUnavailable,

    /// A query coordinate could not be resolved to a graph node (the spatial
    /// index is unavailable or empty).  Routing never substitutes an
    /// arbitrary node.
    #[error("could not resolve coordinates to a graph node")]
    Endpoint,

    /// The engine holds a graph that was not loaded from a file, so no
    /// sibling output path can be derived for the scored map.
    #[error("no source path to derive the scored-map path from")]
    NoSourcePath,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
