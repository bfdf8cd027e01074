//! `roadrisk-core` — foundational types for the roadrisk engine.
//!
//! This crate is a dependency of every other `roadrisk-*` crate.  It
//! intentionally has no `roadrisk-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                |
//! |----------|---------------------------------------------------------|
//! | [`ids`]  | `NodeId`, `NodeIdx`, `EdgeIdx`                          |
//! | [`geo`]  | `GeoPoint`, haversine distance                          |
//! | [`rng`]  | `SimRng` (seedable simulation RNG)                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `NodeId` and `GeoPoint`.|

pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeIdx, NodeId, NodeIdx};
pub use rng::SimRng;
