//! Scoring-subsystem error type.

use thiserror::Error;

/// Errors produced by `roadrisk-score`.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Simulation was asked to draw from a graph with no edges — the uniform
    /// random draw is undefined there, so the state is rejected explicitly
    /// instead of failing silently.
    #[error("cannot simulate accidents on a graph with no edges")]
    EmptyGraph,
}

pub type ScoreResult<T> = Result<T, ScoreError>;
