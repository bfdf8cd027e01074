//! Route statistics aggregation.

use roadrisk_core::NodeId;
use roadrisk_graph::RoadGraph;

use crate::dijkstra::Route;

/// Aggregate figures for a route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStats {
    /// Sum of `length` over the path's edges, metres.
    pub total_length: f64,
    /// Sum of `risk_score` over the path's edges.
    pub total_risk: f64,
}

/// Sum length and risk over the exact edges a search traversed.
///
/// Edges without a `length` contribute nothing to `total_length`.
pub fn route_stats(graph: &RoadGraph, route: &Route) -> RouteStats {
    let mut stats = RouteStats::default();
    for &e in &route.edges {
        let attrs = &graph.edge(e).attrs;
        stats.total_length += attrs.length.unwrap_or(0.0);
        stats.total_risk += attrs.risk_score;
    }
    stats
}

/// Statistics for a route supplied as a bare node sequence (no edge
/// information), e.g. one produced outside this engine.
///
/// For each consecutive pair the *first* connecting edge in storage order is
/// used — a simplification: when parallel edges differ in weight this may
/// not be the edge a weighted search actually chose.  Pairs with no
/// connecting edge (or unknown node ids) are skipped rather than aborting,
/// which can undercount stats for malformed inputs.
pub fn node_path_stats(graph: &RoadGraph, path: &[NodeId]) -> RouteStats {
    let mut stats = RouteStats::default();
    for pair in path.windows(2) {
        let (Some(from), Some(to)) = (graph.node_idx(pair[0]), graph.node_idx(pair[1])) else {
            continue;
        };
        let Some(e) = graph.edge_between(from, to) else {
            continue;
        };
        let attrs = &graph.edge(e).attrs;
        stats.total_length += attrs.length.unwrap_or(0.0);
        stats.total_risk += attrs.risk_score;
    }
    stats
}
