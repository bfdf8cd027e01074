//! Edge attributes and the typed normalization pass.
//!
//! # Why two representations
//!
//! [`RawEdgeAttrs`] is what the codec reads: every value may be a JSON number,
//! a string holding a number, or (for the road class) a list of strings —
//! artifacts of the serialization formats the graph has travelled through.
//! [`EdgeAttrs`] is the strongly typed record everything else computes with.
//!
//! The conversion runs exactly once per load, in [`EdgeAttrs::from_raw`].
//! Coercion failures recover locally with documented defaults and are never
//! propagated:
//!
//! | Field            | Present but unparseable | Absent        |
//! |------------------|-------------------------|---------------|
//! | `highway`        | `"unclassified"`        | `"unclassified"` |
//! | `length`         | `0.0`                   | stays absent  |
//! | `travel_time`    | stays unknown (`None`)  | stays absent  |
//! | `accident_count` | `0`                     | `0`           |
//! | `risk_score`     | `0.0`                   | `0.0`         |
//! | `safety_score`   | `0.0`                   | `0.0`         |
//!
//! `travel_time` is the one field whose failure maps to "unknown" rather than
//! zero: a zero traversal time would make a garbled edge a free shortcut for
//! time-weighted routing.

use serde::{Deserialize, Serialize};

/// Road class recorded when the input carries none, or an unusable one.
const UNCLASSIFIED: &str = "unclassified";

// ── RawValue ──────────────────────────────────────────────────────────────────

/// A persisted attribute value of uncommitted type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Already numeric.
    Number(f64),
    /// A string — possibly holding a number, possibly garbage.
    Text(String),
    /// A list of strings (multi-valued road class).
    List(Vec<String>),
}

impl RawValue {
    /// Numeric view of the value: numbers pass through, strings are parsed.
    /// Lists have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
            RawValue::List(_) => None,
        }
    }
}

// ── RawEdgeAttrs ──────────────────────────────────────────────────────────────

/// Edge attributes exactly as persisted — every field optional and untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEdgeAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highway: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_count: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_score: Option<RawValue>,
}

// ── EdgeAttrs ─────────────────────────────────────────────────────────────────

/// Strongly typed edge attributes.
///
/// `length` and `travel_time` are `Option` because a minimally attributed
/// graph may genuinely lack them; consumers apply their own documented
/// defaults (the risk normalizer assumes 100 m, time weighting derives a
/// cost from length).  The score fields are plain numbers that stay zero
/// until the simulator and normalizer have run.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttrs {
    /// Categorical road class, single-valued after ingestion.
    pub highway: String,
    /// Physical length in metres.
    pub length: Option<f64>,
    /// Traversal time in seconds; `None` means unknown.
    pub travel_time: Option<f64>,
    /// Simulated accident tally.
    pub accident_count: u32,
    /// Normalized accident frequency in [0, 1].
    pub risk_score: f64,
    /// Length blended with risk, usable as an alternative routing weight.
    pub safety_score: f64,
}

impl Default for EdgeAttrs {
    fn default() -> Self {
        EdgeAttrs {
            highway: UNCLASSIFIED.to_string(),
            length: None,
            travel_time: None,
            accident_count: 0,
            risk_score: 0.0,
            safety_score: 0.0,
        }
    }
}

impl EdgeAttrs {
    /// The typed normalization pass (see module docs for the field policy).
    ///
    /// Idempotent: feeding back the output of [`to_raw`](Self::to_raw)
    /// reproduces the same record.
    pub fn from_raw(raw: &RawEdgeAttrs) -> Self {
        EdgeAttrs {
            highway: collapse_highway(raw.highway.as_ref()),
            length: raw.length.as_ref().map(|v| v.as_f64().unwrap_or(0.0)),
            travel_time: raw.travel_time.as_ref().and_then(RawValue::as_f64),
            accident_count: raw
                .accident_count
                .as_ref()
                .and_then(RawValue::as_f64)
                // `as` truncates toward zero and clamps negatives/NaN to 0.
                .map_or(0, |f| f as u32),
            risk_score: raw
                .risk_score
                .as_ref()
                .map_or(0.0, |v| v.as_f64().unwrap_or(0.0)),
            safety_score: raw
                .safety_score
                .as_ref()
                .map_or(0.0, |v| v.as_f64().unwrap_or(0.0)),
        }
    }

    /// Persisted form of this record.  Always emits numeric values; only a
    /// graph that predates scoring round-trips through the string-typed path.
    pub fn to_raw(&self) -> RawEdgeAttrs {
        RawEdgeAttrs {
            highway: Some(RawValue::Text(self.highway.clone())),
            length: self.length.map(RawValue::Number),
            travel_time: self.travel_time.map(RawValue::Number),
            accident_count: Some(RawValue::Number(f64::from(self.accident_count))),
            risk_score: Some(RawValue::Number(self.risk_score)),
            safety_score: Some(RawValue::Number(self.safety_score)),
        }
    }
}

/// Collapse the string-or-list road class to a single value, exactly once at
/// ingestion.  Consumers never see the multi-valued form.
fn collapse_highway(raw: Option<&RawValue>) -> String {
    match raw {
        Some(RawValue::Text(s)) => s.clone(),
        Some(RawValue::List(items)) => items
            .first()
            .cloned()
            .unwrap_or_else(|| UNCLASSIFIED.to_string()),
        Some(RawValue::Number(_)) | None => UNCLASSIFIED.to_string(),
    }
}
