//! Shortest-path search over the road graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use roadrisk_core::{EdgeIdx, NodeId, NodeIdx};
use roadrisk_graph::RoadGraph;

use crate::weight::Weighting;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a successful routing query.
///
/// Besides the node sequence, the route records the exact edges the search
/// relaxed into the path.  Parallel edges between the same node pair can
/// differ in weight, so the statistics step consumes this sequence rather
/// than re-deriving "the" edge for each node pair.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stable node ids from start to destination, endpoints included.
    pub nodes: Vec<NodeId>,
    /// Edges traversed, in order; empty for a start == destination query.
    pub edges: Vec<EdgeIdx>,
}

impl Route {
    /// `true` when start and destination resolved to the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Standard label-setting Dijkstra from `from` to `to` under `weighting`.
///
/// Returns `None` when no path exists — an expected outcome for disconnected
/// components, not an error.  Edge costs are non-negative by construction
/// (see [`Weighting::edge_cost`]); ties break on node index, so results are
/// deterministic for a given graph.
pub fn shortest_path(
    graph: &RoadGraph,
    from: NodeIdx,
    to: NodeIdx,
    weighting: Weighting,
) -> Option<Route> {
    if from == to {
        return Some(Route {
            nodes: vec![graph.node(from).id],
            edges: vec![],
        });
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = edge that reached v; EdgeIdx::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeIdx::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: Reverse makes the std max-heap behave as a min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, NodeIdx)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Some(reconstruct(graph, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let e = graph.edge(edge);
            let new_cost = cost.saturating_add(weighting.edge_cost(&e.attrs));

            if new_cost < dist[e.to.index()] {
                dist[e.to.index()] = new_cost;
                prev_edge[e.to.index()] = edge;
                heap.push(Reverse((new_cost, e.to)));
            }
        }
    }

    None
}

fn reconstruct(graph: &RoadGraph, prev_edge: &[EdgeIdx], from: NodeIdx, to: NodeIdx) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeIdx::INVALID);
        edges.push(e);
        cur = graph.edge(e).from;
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(graph.node(from).id);
    for &e in &edges {
        nodes.push(graph.node(graph.edge(e).to).id);
    }

    Route { nodes, edges }
}
