//! Directed multigraph → undirected simple graph.
//!
//! Every raw edge `(from, to)` is keyed by its unordered pair
//! `{min(from, to), max(from, to)}`.  The first raw edge with a given key
//! creates the undirected edge (fixing its position and orientation); later
//! ones are merged into it according to [`CollapsePolicy`].
//!
//! All raw nodes survive, including nodes that end up isolated.

use std::str::FromStr;

use rustc_hash::FxHashMap;
use tracing::debug;

use rn_core::NodeId;

use crate::raw::RawNetwork;
use crate::undirected::{UndirectedEdge, UndirectedGraph};
use crate::GraphError;

// ── Options ───────────────────────────────────────────────────────────────────

/// Which length survives when several raw edges collapse into one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollapsePolicy {
    /// Minimum present length.  A present length beats a missing one.
    #[default]
    Shortest,
    /// Keep the attributes of the first raw edge.
    #[cfg_attr(feature = "serde", serde(rename = "first"))]
    FirstSeen,
    /// Overwrite with every later raw edge.
    #[cfg_attr(feature = "serde", serde(rename = "last"))]
    LastSeen,
}

impl CollapsePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CollapsePolicy::Shortest  => "shortest",
            CollapsePolicy::FirstSeen => "first",
            CollapsePolicy::LastSeen  => "last",
        }
    }

    /// Merge `incoming` into the surviving `current` length.
    #[inline]
    fn merge(self, current: Option<f64>, incoming: Option<f64>) -> Option<f64> {
        match self {
            CollapsePolicy::FirstSeen => current,
            CollapsePolicy::LastSeen  => incoming,
            CollapsePolicy::Shortest  => match (current, incoming) {
                (Some(c), Some(i)) => Some(c.min(i)),
                (Some(c), None)    => Some(c),
                (None, i)          => i,
            },
        }
    }
}

impl FromStr for CollapsePolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortest" | "min"     => Ok(CollapsePolicy::Shortest),
            "first" | "first_seen" => Ok(CollapsePolicy::FirstSeen),
            "last" | "last_seen"   => Ok(CollapsePolicy::LastSeen),
            _ => Err(GraphError::UnknownCollapsePolicy(s.to_owned())),
        }
    }
}

impl std::fmt::Display for CollapsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub collapse: CollapsePolicy,
    /// Keep `(n, n)` edges.  Off by default; `rn-io` validation flags
    /// `u == v` records.
    pub keep_self_loops: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Collapse `raw` into an undirected simple graph.
pub fn normalize(raw: &RawNetwork, opts: NormalizeOptions) -> UndirectedGraph {
    let mut collapser = EdgeCollapser::new(opts, raw.edge_count());
    for (from, to, len) in raw.edges() {
        collapser.insert(from, to, len);
    }
    let (edges, stats) = collapser.finish();

    debug!(
        raw_edges = raw.edge_count(),
        undirected_edges = edges.len(),
        merged = stats.merged,
        self_loops_dropped = stats.self_loops_dropped,
        policy = %opts.collapse,
        "normalized road network"
    );

    UndirectedGraph {
        node_osm_id: raw.node_osm_id.clone(),
        node_pos:    raw.node_pos.clone(),
        edges,
    }
}

// ── EdgeCollapser ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct CollapseStats {
    merged:             usize,
    self_loops_dropped: usize,
}

/// Accumulates edges keyed by unordered endpoint pair.
struct EdgeCollapser {
    opts:  NormalizeOptions,
    slot:  FxHashMap<(NodeId, NodeId), usize>,
    edges: Vec<UndirectedEdge>,
    stats: CollapseStats,
}

impl EdgeCollapser {
    fn new(opts: NormalizeOptions, capacity: usize) -> Self {
        let mut slot = FxHashMap::default();
        slot.reserve(capacity / 2);
        Self {
            opts,
            slot,
            edges: Vec::with_capacity(capacity / 2),
            stats: CollapseStats::default(),
        }
    }

    fn insert(&mut self, a: NodeId, b: NodeId, length_m: Option<f64>) {
        if a == b && !self.opts.keep_self_loops {
            self.stats.self_loops_dropped += 1;
            return;
        }

        let key = if a <= b { (a, b) } else { (b, a) };
        match self.slot.get(&key) {
            Some(&i) => {
                let edge = &mut self.edges[i];
                edge.length_m = self.opts.collapse.merge(edge.length_m, length_m);
                self.stats.merged += 1;
            }
            None => {
                self.slot.insert(key, self.edges.len());
                self.edges.push(UndirectedEdge { a, b, length_m });
            }
        }
    }

    fn finish(self) -> (Vec<UndirectedEdge>, CollapseStats) {
        (self.edges, self.stats)
    }
}
