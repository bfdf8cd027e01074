//! The `RouteEngine` facade.
//!
//! Owns the loaded graph and everything that operates on it: the spatial
//! index for endpoint resolution, the seeded RNG for simulation, and the
//! risk-weight table.  Mutating operations take `&mut self`, which encodes
//! the single-writer-at-a-time discipline in the API — simulation and
//! scoring can never run concurrently with a routing query on the same
//! engine.
//!
//! A failed load is not fatal: the engine simply records "no graph loaded"
//! and every subsequent graph-dependent call reports
//! [`EngineError::GraphUnavailable`].

use std::path::{Path, PathBuf};

use log::{info, warn};

use roadrisk_core::{GeoPoint, SimRng};
use roadrisk_graph::{RoadGraph, SpatialIndex, load_graph, save_graph};
use roadrisk_score::{RiskWeights, calculate_risk, simulate_risk};

use crate::dijkstra::{Route, shortest_path};
use crate::error::{EngineError, EngineResult};
use crate::stats::{RouteStats, route_stats};
use crate::weight::{RouteType, Weighting};

/// Risk-scoring and routing engine over one road-network graph.
pub struct RouteEngine {
    graph: Option<RoadGraph>,
    spatial: Option<SpatialIndex>,
    /// Where the graph was loaded from; used to derive the scored-map path.
    source_path: Option<PathBuf>,
    rng: SimRng,
    weights: RiskWeights,
}

impl RouteEngine {
    /// An engine with no graph and the default risk-weight table.
    ///
    /// `seed` fixes the simulation RNG, so a run is reproducible from its
    /// inputs and seed alone.
    pub fn new(seed: u64) -> Self {
        Self::with_weights(seed, RiskWeights::default())
    }

    pub fn with_weights(seed: u64, weights: RiskWeights) -> Self {
        RouteEngine {
            graph: None,
            spatial: None,
            source_path: None,
            rng: SimRng::new(seed),
            weights,
        }
    }

    /// Wrap an already-built graph (no backing file).
    pub fn from_graph(graph: RoadGraph, seed: u64) -> Self {
        let mut engine = Self::new(seed);
        engine.set_graph(graph);
        engine
    }

    /// Replace the engine's graph with one built in memory (no backing
    /// file); rebuilds the spatial index.
    pub fn set_graph(&mut self, graph: RoadGraph) {
        self.install(graph, None);
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Load (and normalize) a graph from `path`.
    ///
    /// On failure the engine is left with no graph — the error is returned,
    /// not hidden, but later calls degrade to [`EngineError::GraphUnavailable`]
    /// instead of crashing.
    pub fn load(&mut self, path: &Path) -> EngineResult<()> {
        match load_graph(path) {
            Ok(graph) => {
                self.install(graph, Some(path.to_path_buf()));
                Ok(())
            }
            Err(e) => {
                warn!("failed to load graph from {}: {e}", path.display());
                self.graph = None;
                self.spatial = None;
                self.source_path = None;
                Err(e.into())
            }
        }
    }

    /// Save the current graph to `path`.
    pub fn save(&self, path: &Path) -> EngineResult<()> {
        let graph = self.graph()?;
        save_graph(graph, path)?;
        Ok(())
    }

    /// Save the scored graph next to its source file, as
    /// `<stem>_scored.<ext>`, and return the path written.
    pub fn save_scored_map(&self) -> EngineResult<PathBuf> {
        let graph = self.graph()?;
        let source = self
            .source_path
            .as_deref()
            .ok_or(EngineError::NoSourcePath)?;
        let out = scored_path(source);
        save_graph(graph, &out)?;
        Ok(out)
    }

    // ── Scoring ───────────────────────────────────────────────────────────

    /// Run the Monte-Carlo accident simulation on the loaded graph.
    pub fn simulate_risk(&mut self, num_simulations: u32) -> EngineResult<()> {
        let graph = self.graph.as_mut().ok_or(EngineError::GraphUnavailable)?;
        simulate_risk(graph, num_simulations, &self.weights, &mut self.rng)?;
        Ok(())
    }

    /// Normalize accident counts into risk and safety scores.
    pub fn calculate_risk(&mut self) -> EngineResult<()> {
        let graph = self.graph.as_mut().ok_or(EngineError::GraphUnavailable)?;
        calculate_risk(graph);
        Ok(())
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Shortest path between two coordinate pairs under the given route
    /// type.
    ///
    /// Returns `Ok(None)` when the resolved endpoints are disconnected — an
    /// expected outcome, not an error.  Endpoint resolution failures (no
    /// spatial index, empty graph) are [`EngineError::Endpoint`]; routing
    /// never silently substitutes a node.
    pub fn find_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        route_type: RouteType,
    ) -> EngineResult<Option<(Route, RouteStats)>> {
        let graph = self.graph()?;
        let spatial = self.spatial.as_ref().ok_or(EngineError::Endpoint)?;

        let start_id = spatial.nearest_node(start).ok_or(EngineError::Endpoint)?;
        let end_id = spatial.nearest_node(end).ok_or(EngineError::Endpoint)?;
        let from = graph.node_idx(start_id).ok_or(EngineError::Endpoint)?;
        let to = graph.node_idx(end_id).ok_or(EngineError::Endpoint)?;

        let weighting = Weighting::select(route_type, graph.has_travel_times());
        info!("finding {route_type} route ({start} → {end}, weight {weighting:?})");

        match shortest_path(graph, from, to, weighting) {
            Some(route) => {
                let stats = route_stats(graph, &route);
                Ok(Some((route, stats)))
            }
            None => {
                info!("no path found between the specified points");
                Ok(None)
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only view of the loaded graph.
    pub fn graph(&self) -> EngineResult<&RoadGraph> {
        self.graph.as_ref().ok_or(EngineError::GraphUnavailable)
    }

    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    fn install(&mut self, graph: RoadGraph, source: Option<PathBuf>) {
        self.spatial = Some(SpatialIndex::build(&graph));
        self.graph = Some(graph);
        self.source_path = source;
    }
}

/// `<dir>/<stem>_scored.<ext>` next to the source file.
pub(crate) fn scored_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    let mut name = format!("{stem}_scored");
    if let Some(ext) = source.extension().and_then(|s| s.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    source.with_file_name(name)
}
