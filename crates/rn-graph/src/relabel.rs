//! Dense 1-based relabeling and edge weight derivation.
//!
//! The node at storage position `i` becomes vertex `i + 1`.  No meaning is
//! attached to the numbering beyond density and uniqueness; it follows the
//! node order of the input graph, which follows the order the data source
//! delivered nodes in.

use rustc_hash::FxHashMap;

use rn_core::{GeoPoint, NodeId, OsmNodeId, VertexId};

use crate::undirected::UndirectedGraph;
use crate::GraphError;

/// Weight written for an edge without a usable length.
pub const DEFAULT_WEIGHT: u64 = 1;

/// Integer weight of an edge: its length truncated toward zero.
///
/// Missing and non-finite lengths map to [`DEFAULT_WEIGHT`]; negative
/// lengths saturate to `0`.
#[inline]
pub fn edge_weight(length_m: Option<f64>) -> u64 {
    match length_m {
        Some(len) if len.is_finite() => len.trunc() as u64,
        _ => DEFAULT_WEIGHT,
    }
}

// ── Output types ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelabeledEdge {
    pub u:        VertexId,
    pub v:        VertexId,
    pub length_m: Option<f64>,
}

impl RelabeledEdge {
    #[inline]
    pub fn weight(&self) -> u64 {
        edge_weight(self.length_m)
    }
}

/// Integer-keyed copy of an undirected graph.
#[derive(Clone, Debug, Default)]
pub struct RelabeledGraph {
    /// `V`: vertices are `1..=vertex_count`.
    pub vertex_count: u32,
    /// Edges in the input graph's edge order.
    pub edges: Vec<RelabeledEdge>,
}

impl RelabeledGraph {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Bijection between provider node ids and relabeled vertices.
#[derive(Clone, Debug, Default)]
pub struct NodeMapping {
    osm_ids:   Vec<OsmNodeId>,
    positions: Vec<GeoPoint>,
    lookup:    FxHashMap<OsmNodeId, VertexId>,
}

impl NodeMapping {
    pub fn len(&self) -> usize {
        self.osm_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.osm_ids.is_empty()
    }

    pub fn vertex_of(&self, osm_id: OsmNodeId) -> Option<VertexId> {
        self.lookup.get(&osm_id).copied()
    }

    pub fn osm_id_of(&self, v: VertexId) -> Option<OsmNodeId> {
        slot(v).and_then(|i| self.osm_ids.get(i)).copied()
    }

    pub fn position_of(&self, v: VertexId) -> Option<GeoPoint> {
        slot(v).and_then(|i| self.positions.get(i)).copied()
    }

    /// `(vertex, osm_id, position)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, OsmNodeId, GeoPoint)> + '_ {
        self.osm_ids
            .iter()
            .zip(&self.positions)
            .enumerate()
            .map(|(i, (&osm, &pos))| (VertexId::from_position(NodeId(i as u32)), osm, pos))
    }
}

#[inline]
fn slot(v: VertexId) -> Option<usize> {
    v.index().checked_sub(1)
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Assign vertex ids `1..=V` in node order and rewrite every edge.
///
/// # Errors
///
/// [`GraphError::TooManyNodes`] if `V` would not fit below the `VertexId`
/// sentinel.
pub fn relabel(graph: &UndirectedGraph) -> Result<(RelabeledGraph, NodeMapping), GraphError> {
    let n = graph.node_count();
    if n >= u32::MAX as usize {
        return Err(GraphError::TooManyNodes(n));
    }

    let mut lookup = FxHashMap::default();
    lookup.reserve(n);
    for (i, &osm) in graph.node_osm_id.iter().enumerate() {
        lookup.insert(osm, VertexId::from_position(NodeId(i as u32)));
    }

    let edges = graph
        .edges
        .iter()
        .map(|e| RelabeledEdge {
            u:        VertexId::from_position(e.a),
            v:        VertexId::from_position(e.b),
            length_m: e.length_m,
        })
        .collect();

    let relabeled = RelabeledGraph { vertex_count: n as u32, edges };
    let mapping = NodeMapping {
        osm_ids:   graph.node_osm_id.clone(),
        positions: graph.node_pos.clone(),
        lookup,
    };
    Ok((relabeled, mapping))
}
