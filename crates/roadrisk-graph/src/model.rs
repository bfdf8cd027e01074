//! Road-network multigraph and its builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a node index `n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Edges are sorted by source node and indexed by [`EdgeIdx`]; iteration over
//! a node's outgoing edges is a contiguous memory scan, which is what the
//! Dijkstra inner loop wants.  The sort is stable, so within one source node
//! edges keep their insertion ("storage") order — parallel edges between the
//! same node pair stay in the order the file listed them.
//!
//! # Mutability
//!
//! Topology and node data are fixed at [`build`](RoadGraphBuilder::build)
//! time.  Edge *attributes* stay mutable through
//! [`edge_attrs_mut`](RoadGraph::edge_attrs_mut) — the accident simulator and
//! the risk normalizer rewrite them in place.  Single writer at a time; the
//! graph itself does not arbitrate.

use rustc_hash::FxHashMap;

use roadrisk_core::{EdgeIdx, GeoPoint, NodeId, NodeIdx};

use crate::attrs::EdgeAttrs;
use crate::error::{GraphError, GraphResult};

// ── Components ────────────────────────────────────────────────────────────────

/// A road-network node: stable identifier plus position.  Read-only after
/// the graph is built.
#[derive(Debug, Clone, Copy)]
pub struct RoadNode {
    pub id: NodeId,
    pub pos: GeoPoint,
}

/// A directed road segment between two nodes.
///
/// `key` disambiguates parallel edges between the same ordered node pair
/// (divided roadways, service loops); `(from, to, key)` is the persisted
/// edge identity, while [`EdgeIdx`] is the in-memory handle.
#[derive(Debug, Clone)]
pub struct RoadEdge {
    pub from: NodeIdx,
    pub to: NodeIdx,
    pub key: u32,
    pub attrs: EdgeAttrs,
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed attributed multigraph in CSR form.
///
/// Construct through [`RoadGraphBuilder`] (or the codec, which drives the
/// builder); every edge is guaranteed to reference two nodes present in the
/// graph.
#[derive(Debug)]
pub struct RoadGraph {
    nodes: Vec<RoadNode>,
    node_index: FxHashMap<NodeId, NodeIdx>,
    /// Sorted by `from`; stable within a source node.
    edges: Vec<RoadEdge>,
    /// CSR row pointer.  Length = `node_count + 1`.
    out_start: Vec<u32>,
    /// Set at build time when any edge carries a `travel_time`.
    has_travel_times: bool,
}

impl RoadGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Node access ───────────────────────────────────────────────────────

    pub fn node(&self, idx: NodeIdx) -> &RoadNode {
        &self.nodes[idx.index()]
    }

    /// Resolve a stable identifier to its dense index.
    pub fn node_idx(&self, id: NodeId) -> Option<NodeIdx> {
        self.node_index.get(&id).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.iter()
    }

    // ── Edge access ───────────────────────────────────────────────────────

    pub fn edge(&self, idx: EdgeIdx) -> &RoadEdge {
        &self.edges[idx.index()]
    }

    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge> {
        self.edges.iter()
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIdx> {
        (0..self.edges.len()).map(|i| EdgeIdx(i as u32))
    }

    /// Mutable attribute access — the only write path into a built graph.
    pub fn edge_attrs_mut(&mut self, idx: EdgeIdx) -> &mut EdgeAttrs {
        &mut self.edges[idx.index()].attrs
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over the `EdgeIdx`s of all outgoing edges from `node`.
    ///
    /// A contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeIdx) -> impl Iterator<Item = EdgeIdx> + '_ {
        let start = self.out_start[node.index()] as usize;
        let end = self.out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeIdx(i as u32))
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeIdx) -> usize {
        let start = self.out_start[node.index()] as usize;
        let end = self.out_start[node.index() + 1] as usize;
        end - start
    }

    /// First edge connecting `from` to `to` in storage order, if any.
    ///
    /// When parallel edges connect the pair this picks the first one the file
    /// listed, which is not necessarily the one a weighted search would
    /// traverse — callers that have a real route should use its edge
    /// sequence instead.
    pub fn edge_between(&self, from: NodeIdx, to: NodeIdx) -> Option<EdgeIdx> {
        self.out_edges(from).find(|&e| self.edges[e.index()].to == to)
    }

    // ── Capabilities ──────────────────────────────────────────────────────

    /// Whether any edge carries a `travel_time`.
    ///
    /// Computed once at build time and used for weight fallback, replacing a
    /// probe of an arbitrary representative edge.  Presence is assumed to be
    /// graph-uniform; edges missing the attribute under time weighting get a
    /// length-derived cost.
    pub fn has_travel_times(&self) -> bool {
        self.has_travel_times
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes and edges may be added in any order, except that an edge's endpoints
/// must already be known — an edge naming an unknown [`NodeId`] is rejected
/// with [`GraphError::UnknownNode`], which is how the codec turns a corrupt
/// file into an error instead of a malformed graph.
pub struct RoadGraphBuilder {
    nodes: Vec<RoadNode>,
    node_index: FxHashMap<NodeId, NodeIdx>,
    raw_edges: Vec<RoadEdge>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            raw_edges: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index: FxHashMap::default(),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its dense index.
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) -> GraphResult<NodeIdx> {
        if self.node_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let idx = NodeIdx(self.nodes.len() as u32);
        self.nodes.push(RoadNode { id, pos });
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Add a directed edge between two previously added nodes.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        key: u32,
        attrs: EdgeAttrs,
    ) -> GraphResult<()> {
        let from = *self
            .node_index
            .get(&from)
            .ok_or(GraphError::UnknownNode(from))?;
        let to = *self
            .node_index
            .get(&to)
            .ok_or(GraphError::UnknownNode(to))?;
        self.raw_edges.push(RoadEdge { from, to, key, attrs });
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// O(E log E) for the edge sort.  The sort is stable so parallel edges
    /// keep their insertion order within a source node.
    pub fn build(self) -> RoadGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut edges = self.raw_edges;
        edges.sort_by_key(|e| e.from.0);

        // Build CSR row pointer.
        let mut out_start = vec![0u32; node_count + 1];
        for e in &edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[node_count] as usize, edge_count);

        let has_travel_times = edges.iter().any(|e| e.attrs.travel_time.is_some());

        RoadGraph {
            nodes: self.nodes,
            node_index: self.node_index,
            edges,
            out_start,
            has_travel_times,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
