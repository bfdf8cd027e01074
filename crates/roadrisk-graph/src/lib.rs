//! `roadrisk-graph` — the attributed road-network multigraph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`model`]   | `RoadGraph` (CSR multigraph), `RoadGraphBuilder`          |
//! | [`attrs`]   | `EdgeAttrs`, `RawValue`, the typed normalization pass     |
//! | [`codec`]   | JSON load/save (`load_graph`, `save_graph`, …)            |
//! | [`spatial`] | `SpatialIndex` — R-tree nearest-node lookup               |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                            |
//!
//! # Attribute normalization
//!
//! The persisted format cannot promise numeric typing — a graph that has been
//! through a save/load cycle may carry `"length": "142.7"` just as easily as
//! `"length": 142.7`.  Every load therefore runs one typed normalization pass
//! ([`attrs::EdgeAttrs::from_raw`]) before the graph is handed to anything
//! that computes with weights.  Downstream crates only ever see [`EdgeAttrs`].

pub mod attrs;
pub mod codec;
pub mod error;
pub mod model;
pub mod spatial;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{EdgeAttrs, RawEdgeAttrs, RawValue};
pub use codec::{load_graph, load_graph_reader, save_graph, save_graph_writer};
pub use error::{GraphError, GraphResult};
pub use model::{RoadEdge, RoadGraph, RoadGraphBuilder, RoadNode};
pub use spatial::SpatialIndex;
