//! JSON graph codec.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "nodes": [ {"id": 1001, "lat": 30.34, "lon": 76.39}, ... ],
//!   "edges": [ {"from": 1001, "to": 1002, "key": 0,
//!               "highway": "residential", "length": "142.7", ...}, ... ]
//! }
//! ```
//!
//! Attribute values on **load** may be numbers, number-holding strings, or a
//! string list for `highway` — see [`crate::attrs`].  **Save** always emits
//! numeric values.  `key` defaults to 0 so simple graphs can omit it.
//!
//! Path-based and reader/writer entry points are both provided; tests and
//! in-memory callers use the latter with an `io::Cursor`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use roadrisk_core::{GeoPoint, NodeId};

use crate::attrs::{EdgeAttrs, RawEdgeAttrs};
use crate::error::GraphResult;
use crate::model::{RoadGraph, RoadGraphBuilder};

// ── Persisted records ─────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct PersistedNode {
    id: u64,
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
struct PersistedEdge {
    from: u64,
    to: u64,
    #[serde(default)]
    key: u32,
    #[serde(flatten)]
    attrs: RawEdgeAttrs,
}

#[derive(Serialize, Deserialize)]
struct PersistedGraph {
    nodes: Vec<PersistedNode>,
    edges: Vec<PersistedEdge>,
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Load a graph from a JSON file.
pub fn load_graph(path: &Path) -> GraphResult<RoadGraph> {
    let file = File::open(path)?;
    let graph = load_graph_reader(BufReader::new(file))?;
    info!(
        "graph loaded from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Like [`load_graph`] but accepts any `Read` source.
///
/// Runs the attribute normalization pass on every edge, so the returned
/// graph is fully typed regardless of how the file spelled its numbers.
pub fn load_graph_reader<R: Read>(reader: R) -> GraphResult<RoadGraph> {
    let doc: PersistedGraph = serde_json::from_reader(reader)?;

    let mut builder = RoadGraphBuilder::with_capacity(doc.nodes.len(), doc.edges.len());
    for n in &doc.nodes {
        builder.add_node(NodeId(n.id), GeoPoint::new(n.lat, n.lon))?;
    }
    for e in &doc.edges {
        builder.add_edge(
            NodeId(e.from),
            NodeId(e.to),
            e.key,
            EdgeAttrs::from_raw(&e.attrs),
        )?;
    }
    Ok(builder.build())
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Save a graph to a JSON file.
pub fn save_graph(graph: &RoadGraph, path: &Path) -> GraphResult<()> {
    let file = File::create(path)?;
    save_graph_writer(graph, BufWriter::new(file))?;
    info!(
        "graph saved to {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Like [`save_graph`] but accepts any `Write` sink.
pub fn save_graph_writer<W: Write>(graph: &RoadGraph, writer: W) -> GraphResult<()> {
    let doc = PersistedGraph {
        nodes: graph
            .nodes()
            .map(|n| PersistedNode {
                id: n.id.0,
                lat: n.pos.lat,
                lon: n.pos.lon,
            })
            .collect(),
        edges: graph
            .edges()
            .map(|e| PersistedEdge {
                from: graph.node(e.from).id.0,
                to: graph.node(e.to).id.0,
                key: e.key,
                attrs: e.attrs.to_raw(),
            })
            .collect(),
    };
    serde_json::to_writer(writer, &doc)?;
    Ok(())
}
