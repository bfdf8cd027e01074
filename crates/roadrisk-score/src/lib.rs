//! `roadrisk-score` — accident simulation and risk scoring.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`weights`]   | `RiskWeights` — per-road-class acceptance probabilities |
//! | [`simulator`] | `simulate_risk` — Monte-Carlo accident counts           |
//! | [`scoring`]   | `calculate_risk` — risk/safety score normalization      |
//! | [`error`]     | `ScoreError`, `ScoreResult<T>`                          |
//!
//! # Usage
//!
//! The two passes run in order, each exactly once per simulation run, and
//! mutate the graph in place:
//!
//! ```rust,ignore
//! let mut rng = SimRng::new(seed);
//! simulate_risk(&mut graph, 1_000, &RiskWeights::default(), &mut rng)?;
//! calculate_risk(&mut graph);
//! ```
//!
//! No other writer may touch the graph while they run; the engine facade in
//! `roadrisk-route` encodes that discipline with `&mut self`.

pub mod error;
pub mod scoring;
pub mod simulator;
pub mod weights;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ScoreError, ScoreResult};
pub use scoring::{FALLBACK_LENGTH_M, calculate_risk};
pub use simulator::simulate_risk;
pub use weights::RiskWeights;
