//! Risk and safety score normalization.

use log::debug;

use roadrisk_core::EdgeIdx;
use roadrisk_graph::RoadGraph;

/// Length assumed, in metres, for edges that carry no `length` attribute,
/// so `safety_score` is defined even on minimally attributed graphs.
pub const FALLBACK_LENGTH_M: f64 = 100.0;

/// Derive `risk_score` and `safety_score` on every edge from the simulated
/// accident counts.
///
/// `risk_score = accident_count / max_accidents` — a monotonic,
/// order-preserving transform into [0, 1]: the edge(s) with the most
/// accidents score exactly 1.  When every count is zero the divisor is
/// treated as 1, so an all-zero simulation yields `risk_score = 0`
/// everywhere rather than an undefined value.
///
/// `safety_score = length × (1 + 5 × risk_score)` — physical length
/// inflated by up to 6× on the riskiest edges, usable as an alternative
/// routing weight.
///
/// Idempotent while accident counts are unchanged.
pub fn calculate_risk(graph: &mut RoadGraph) {
    let max_accidents = graph
        .edges()
        .map(|e| e.attrs.accident_count)
        .max()
        .unwrap_or(0)
        .max(1);

    for i in 0..graph.edge_count() {
        let attrs = graph.edge_attrs_mut(EdgeIdx(i as u32));
        let risk = f64::from(attrs.accident_count) / f64::from(max_accidents);
        attrs.risk_score = risk;
        attrs.safety_score = attrs.length.unwrap_or(FALLBACK_LENGTH_M) * (1.0 + 5.0 * risk);
    }

    debug!(
        "risk scores normalized over {} edges (max accidents {max_accidents})",
        graph.edge_count()
    );
}
