//! R-tree nearest-node lookup.
//!
//! Snapping query coordinates to graph nodes is modelled as a capability
//! separate from the graph itself: the engine owns an `Option<SpatialIndex>`
//! and treats its absence (or an empty index) as an endpoint-resolution
//! failure rather than guessing a node.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use roadrisk_core::{GeoPoint, NodeId};

use crate::model::RoadGraph;

/// Entry stored in the R-tree: a `[lat, lon]` point with its [`NodeId`].
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space — sufficient for
    /// nearest-node queries at city scale.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Spatial index over a graph's node positions.
pub struct SpatialIndex {
    tree: RTree<NodeEntry>,
}

impl SpatialIndex {
    /// Bulk-load the index from a graph.  O(N log N), faster than N inserts.
    pub fn build(graph: &RoadGraph) -> Self {
        let entries: Vec<NodeEntry> = graph
            .nodes()
            .map(|n| NodeEntry {
                point: [n.pos.lat, n.pos.lon],
                id: n.id,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// The stable id of the node nearest to `pos`.
    ///
    /// `None` only when the graph has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.tree
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
