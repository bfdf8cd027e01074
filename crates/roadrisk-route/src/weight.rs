//! Route types and edge-weight selection.
//!
//! # Cost units
//!
//! Dijkstra runs on `u32` costs.  Each weighting scales its float attribute
//! into an integer unit fine enough that the quantization cannot reorder
//! realistic alternatives:
//!
//! | Weighting    | Source attribute      | Unit              |
//! |--------------|-----------------------|-------------------|
//! | `TravelTime` | `travel_time` (s)     | milliseconds      |
//! | `Length`     | `length` (m)          | millimetres       |
//! | `RiskScore`  | `risk_score` ([0,1])  | micro-risk (1e-6) |

use roadrisk_graph::EdgeAttrs;
use roadrisk_score::FALLBACK_LENGTH_M;

/// Assumed speed for deriving a traversal time from bare length when an edge
/// lacks `travel_time` under time weighting (≈ 50 km/h).
const FALLBACK_SPEED_MPS: f64 = 13.9;

// ── RouteType ─────────────────────────────────────────────────────────────────

/// What the caller wants optimized.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RouteType {
    /// Minimize travel time (falling back to length when the graph carries
    /// no travel times).
    #[default]
    Fastest,
    /// Minimize accumulated risk score.
    Safest,
}

impl RouteType {
    /// Map a route-type name to a variant.  Only `"safest"` selects
    /// [`RouteType::Safest`]; anything else — including unrecognized names —
    /// means [`RouteType::Fastest`], the default.
    pub fn from_name(name: &str) -> Self {
        if name == "safest" {
            RouteType::Safest
        } else {
            RouteType::Fastest
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::Fastest => "fastest",
            RouteType::Safest => "safest",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Weighting ─────────────────────────────────────────────────────────────────

/// The edge attribute a shortest-path search accumulates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Weighting {
    TravelTime,
    Length,
    RiskScore,
}

impl Weighting {
    /// Select the weighting for a route type.
    ///
    /// `has_travel_times` is the graph-level capability flag computed at
    /// build time; attribute presence is assumed graph-uniform (edges
    /// missing `travel_time` anyway get a length-derived cost).
    pub fn select(route_type: RouteType, has_travel_times: bool) -> Self {
        match route_type {
            RouteType::Safest => Weighting::RiskScore,
            RouteType::Fastest if has_travel_times => Weighting::TravelTime,
            RouteType::Fastest => Weighting::Length,
        }
    }

    /// Scaled integer cost of traversing an edge (non-negative by
    /// construction; negative or NaN attribute values clamp to 0).
    pub fn edge_cost(self, attrs: &EdgeAttrs) -> u32 {
        match self {
            Weighting::TravelTime => {
                let secs = attrs.travel_time.unwrap_or_else(|| {
                    attrs.length.unwrap_or(FALLBACK_LENGTH_M) / FALLBACK_SPEED_MPS
                });
                (secs * 1_000.0) as u32
            }
            Weighting::Length => (attrs.length.unwrap_or(FALLBACK_LENGTH_M) * 1_000.0) as u32,
            Weighting::RiskScore => (attrs.risk_score * 1_000_000.0) as u32,
        }
    }
}
