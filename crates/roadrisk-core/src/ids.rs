//! Strongly typed, zero-cost identifier wrappers.
//!
//! Two kinds of identifier coexist:
//!
//! - [`NodeId`] is the *stable* node identifier carried by the persisted
//!   graph.  It survives save/load round-trips and is what routes report.
//! - [`NodeIdx`] and [`EdgeIdx`] are dense indexes into the in-memory node
//!   and edge arrays.  They are assigned at build time and never persisted.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing via `id.0 as usize`, but callers should prefer the
//! `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the type's maximum value.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Stable identifier of a road-network node, preserved across save/load.
    /// Opaque to the engine; typically an upstream map-provider node ID.
    pub struct NodeId(u64);
}

typed_id! {
    /// Dense index of a node in the in-memory graph arrays.
    pub struct NodeIdx(u32);
}

typed_id! {
    /// Dense index of a directed edge in the in-memory graph arrays.
    ///
    /// Doubles as the disambiguator handle for parallel edges: two edges
    /// between the same node pair have distinct `EdgeIdx` values.
    pub struct EdgeIdx(u32);
}
