//! Monte-Carlo accident simulation.
//!
//! Rejection sampling: each attempt draws one edge uniformly (with
//! replacement) and a roll in [1, 100]; the attempt is accepted — one
//! accident on that edge — when the roll is within the edge's road-class
//! probability.  The attempt budget of `3 × num_simulations` bounds the loop
//! when acceptance probabilities are low, so a graph of living streets may
//! legitimately end up with fewer accidents than requested.

use log::debug;

use roadrisk_core::{EdgeIdx, SimRng};
use roadrisk_graph::RoadGraph;

use crate::error::{ScoreError, ScoreResult};
use crate::weights::RiskWeights;

/// Attempts allowed per requested accident.
const ATTEMPT_MULTIPLIER: u64 = 3;

/// Assign simulated accident counts to every edge of `graph`.
///
/// Resets all `accident_count`s to zero first; edges never accepted keep
/// zero.  The sum of all counts afterwards is at most `num_simulations`.
///
/// `rng` is the caller's seeded randomness source — two runs with the same
/// graph, budget, weights, and seed produce identical counts.
///
/// # Errors
///
/// [`ScoreError::EmptyGraph`] when the graph has no edges (regardless of
/// `num_simulations` — the invalid state is the empty edge set, not the
/// budget).
pub fn simulate_risk(
    graph: &mut RoadGraph,
    num_simulations: u32,
    weights: &RiskWeights,
    rng: &mut SimRng,
) -> ScoreResult<()> {
    let edge_count = graph.edge_count() as u32;
    if edge_count == 0 {
        return Err(ScoreError::EmptyGraph);
    }

    for i in 0..edge_count {
        graph.edge_attrs_mut(EdgeIdx(i)).accident_count = 0;
    }

    let attempts = u64::from(num_simulations) * ATTEMPT_MULTIPLIER;
    let mut accepted: u32 = 0;

    for _ in 0..attempts {
        if accepted >= num_simulations {
            break;
        }
        let edge = EdgeIdx(rng.gen_range(0..edge_count));
        let roll: u32 = rng.gen_range(1..=100);

        let attrs = graph.edge_attrs_mut(edge);
        if roll <= weights.probability_for(&attrs.highway) {
            attrs.accident_count += 1;
            accepted += 1;
        }
    }

    debug!(
        "accident simulation: {accepted}/{num_simulations} events placed \
         within {attempts} attempts"
    );
    Ok(())
}
