//! Raw road network as delivered by a data source.
//!
//! # Data layout
//!
//! A directed multigraph in Structure-of-Arrays form.  Node arrays are
//! indexed by `NodeId`, edge arrays by raw edge position:
//!
//! ```text
//! node_osm_id[n], node_pos[n]                       — one entry per node
//! edge_from[e], edge_to[e], edge_length_m[e], ...   — one entry per directed edge
//! ```
//!
//! Unlike a routing graph, edges are **not** sorted by source: their order is
//! the order the source emitted them, and that order decides which
//! undirected edge is "first seen" during normalization.

use rustc_hash::FxHashMap;

use rn_core::{GeoPoint, NodeId, OsmNodeId, OsmWayId};

use crate::GraphError;

// ── RawNetwork ────────────────────────────────────────────────────────────────

/// Directed multigraph with geographic node attributes.
///
/// All fields are `pub` for direct indexed access.  Do not construct
/// directly; use [`RawNetworkBuilder`].
#[derive(Debug)]
pub struct RawNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Provider id of each node.  Indexed by `NodeId`.
    pub node_osm_id: Vec<OsmNodeId>,

    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── Edge data (in source order) ───────────────────────────────────────
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,

    /// Segment length in metres; `None` when the source did not provide one.
    pub edge_length_m: Vec<Option<f64>>,

    /// OSM way the segment belongs to, when known.
    pub edge_way: Vec<Option<OsmWayId>>,

    osm_index: FxHashMap<OsmNodeId, NodeId>,
}

impl RawNetwork {
    pub fn empty() -> Self {
        RawNetworkBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// `true` when there is nothing to export: no edges at all.
    ///
    /// A network with isolated nodes but no road segments is still "empty"
    /// for acquisition purposes.
    pub fn is_empty(&self) -> bool {
        self.edge_to.is_empty()
    }

    /// Look up the dense id of a provider node.
    #[inline]
    pub fn node_of(&self, osm_id: OsmNodeId) -> Option<NodeId> {
        self.osm_index.get(&osm_id).copied()
    }

    /// Iterator over `(from, to, length_m)` in source order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Option<f64>)> + '_ {
        self.edge_from
            .iter()
            .zip(&self.edge_to)
            .zip(&self.edge_length_m)
            .map(|((&from, &to), &len)| (from, to, len))
    }
}

// ── RawNetworkBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RawNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes are deduplicated by OSM id: adding the same id twice returns the
/// first `NodeId` and keeps the first position.
///
/// # Example
///
/// ```
/// use rn_core::{GeoPoint, OsmNodeId};
/// use rn_graph::RawNetworkBuilder;
///
/// let mut b = RawNetworkBuilder::new();
/// let a = b.add_node(OsmNodeId(100), GeoPoint::new(40.70, -74.00));
/// let c = b.add_node(OsmNodeId(200), GeoPoint::new(40.71, -74.00));
/// b.add_road(a, c, Some(1_112.0), None);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // both directions
/// ```
pub struct RawNetworkBuilder {
    node_osm_id: Vec<OsmNodeId>,
    node_pos:    Vec<GeoPoint>,
    osm_index:   FxHashMap<OsmNodeId, NodeId>,
    edges:       Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: Option<f64>,
    way:      Option<OsmWayId>,
}

impl RawNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from OSM.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut osm_index = FxHashMap::default();
        osm_index.reserve(nodes);
        Self {
            node_osm_id: Vec::with_capacity(nodes),
            node_pos:    Vec::with_capacity(nodes),
            osm_index,
            edges:       Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, osm_id: OsmNodeId, pos: GeoPoint) -> NodeId {
        if let Some(&id) = self.osm_index.get(&osm_id) {
            return id;
        }
        let id = NodeId(self.node_pos.len() as u32);
        self.node_osm_id.push(osm_id);
        self.node_pos.push(pos);
        self.osm_index.insert(osm_id, id);
        id
    }

    #[inline]
    pub fn node_of(&self, osm_id: OsmNodeId) -> Option<NodeId> {
        self.osm_index.get(&osm_id).copied()
    }

    /// Position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.node_pos[id.index()]
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(
        &mut self,
        from:     NodeId,
        to:       NodeId,
        length_m: Option<f64>,
        way:      Option<OsmWayId>,
    ) {
        debug_assert!(from.index() < self.node_pos.len() && to.index() < self.node_pos.len());
        self.edges.push(RawEdge { from, to, length_m, way });
    }

    /// Convenience: add edges in **both directions** for a two-way segment.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: Option<f64>, way: Option<OsmWayId>) {
        self.add_directed_edge(a, b, length_m, way);
        self.add_directed_edge(b, a, length_m, way);
    }

    /// Add the segment between two provider nodes, measuring its length as
    /// the great-circle distance between their positions.
    ///
    /// `oneway` adds only the `a → b` direction.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint was never added.
    pub fn connect(
        &mut self,
        a:      OsmNodeId,
        b:      OsmNodeId,
        way:    Option<OsmWayId>,
        oneway: bool,
    ) -> Result<(), GraphError> {
        let from = self.node_of(a).ok_or(GraphError::UnknownNode(a))?;
        let to = self.node_of(b).ok_or(GraphError::UnknownNode(b))?;
        let len_m = self.node_pos(from).distance_m(self.node_pos(to));

        if oneway {
            self.add_directed_edge(from, to, Some(len_m), way);
        } else {
            self.add_road(from, to, Some(len_m), way);
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.node_pos.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`RawNetwork`].  Edge order is kept.
    pub fn build(self) -> RawNetwork {
        let edge_from     = self.edges.iter().map(|e| e.from).collect();
        let edge_to       = self.edges.iter().map(|e| e.to).collect();
        let edge_length_m = self.edges.iter().map(|e| e.length_m).collect();
        let edge_way      = self.edges.iter().map(|e| e.way).collect();

        RawNetwork {
            node_osm_id: self.node_osm_id,
            node_pos: self.node_pos,
            edge_from,
            edge_to,
            edge_length_m,
            edge_way,
            osm_index: self.osm_index,
        }
    }
}

impl Default for RawNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
