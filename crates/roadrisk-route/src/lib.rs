//! `roadrisk-route` — routing queries and the engine facade.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`weight`]   | `RouteType`, `Weighting`, scaled edge costs              |
//! | [`dijkstra`] | `Route`, `shortest_path`                                 |
//! | [`stats`]    | `RouteStats`, `route_stats`, `node_path_stats`           |
//! | [`engine`]   | `RouteEngine` — load/score/save/route in one owner       |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Serde derives on `Route`/`RouteStats` (and embedded core ids).|

pub mod dijkstra;
pub mod engine;
pub mod error;
pub mod stats;
pub mod weight;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dijkstra::{Route, shortest_path};
pub use engine::RouteEngine;
pub use error::{EngineError, EngineResult};
pub use stats::{RouteStats, node_path_stats, route_stats};
pub use weight::{RouteType, Weighting};
