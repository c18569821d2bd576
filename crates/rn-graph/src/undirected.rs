//! Undirected simple graph produced by normalization.
//!
//! Nodes keep their provider identity; edges are stored once per unordered
//! endpoint pair, in first-seen order.  [`Adjacency`] is a CSR view built on
//! demand for the passes that walk neighbourhoods.

use rn_core::{GeoPoint, NodeId, OsmNodeId};

/// One undirected edge.  `(a, b)` keeps the orientation of the raw edge that
/// first introduced the pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UndirectedEdge {
    pub a:        NodeId,
    pub b:        NodeId,
    pub length_m: Option<f64>,
}

impl UndirectedEdge {
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The endpoint opposite `n`.
    #[inline]
    pub fn other(&self, n: NodeId) -> NodeId {
        if self.a == n { self.b } else { self.a }
    }
}

/// Undirected simple graph with geographic node attributes.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    pub node_osm_id: Vec<OsmNodeId>,
    pub node_pos:    Vec<GeoPoint>,
    pub edges:       Vec<UndirectedEdge>,
}

impl UndirectedGraph {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Nodes with no incident edge.
    pub fn isolated_node_count(&self) -> usize {
        let adj = self.adjacency();
        (0..self.node_count())
            .filter(|&i| adj.degree(NodeId(i as u32)) == 0)
            .count()
    }

    /// Build the CSR neighbourhood view.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::build(self.node_count(), &self.edges)
    }

    /// Subgraph induced by the nodes with `keep[n] == true`.
    ///
    /// Node order and edge order are preserved; node ids are compacted.
    pub fn induced(&self, keep: &[bool]) -> UndirectedGraph {
        debug_assert_eq!(keep.len(), self.node_count());

        let mut remap = vec![NodeId::INVALID; self.node_count()];
        let mut out = UndirectedGraph::default();
        for (i, _) in keep.iter().enumerate().filter(|(_, k)| **k) {
            remap[i] = NodeId(out.node_pos.len() as u32);
            out.node_osm_id.push(self.node_osm_id[i]);
            out.node_pos.push(self.node_pos[i]);
        }

        out.edges = self
            .edges
            .iter()
            .filter(|e| keep[e.a.index()] && keep[e.b.index()])
            .map(|e| UndirectedEdge {
                a:        remap[e.a.index()],
                b:        remap[e.b.index()],
                length_m: e.length_m,
            })
            .collect();
        out
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// CSR incidence lists: for node `n`, `incident(n)` yields
/// `(neighbour, edge_index)` pairs in edge order.
///
/// A self-loop appears once in its node's list.
pub struct Adjacency {
    start:   Vec<u32>,
    entries: Vec<(NodeId, u32)>,
}

impl Adjacency {
    fn build(node_count: usize, edges: &[UndirectedEdge]) -> Self {
        let mut start = vec![0u32; node_count + 1];
        for e in edges {
            start[e.a.index() + 1] += 1;
            if !e.is_self_loop() {
                start[e.b.index() + 1] += 1;
            }
        }
        for i in 1..=node_count {
            start[i] += start[i - 1];
        }

        let mut cursor: Vec<u32> = start[..node_count].to_vec();
        let mut entries = vec![(NodeId::INVALID, 0u32); start[node_count] as usize];
        for (idx, e) in edges.iter().enumerate() {
            let slot = &mut cursor[e.a.index()];
            entries[*slot as usize] = (e.b, idx as u32);
            *slot += 1;
            if !e.is_self_loop() {
                let slot = &mut cursor[e.b.index()];
                entries[*slot as usize] = (e.a, idx as u32);
                *slot += 1;
            }
        }

        Self { start, entries }
    }

    #[inline]
    pub fn incident(&self, n: NodeId) -> &[(NodeId, u32)] {
        let s = self.start[n.index()] as usize;
        let e = self.start[n.index() + 1] as usize;
        &self.entries[s..e]
    }

    #[inline]
    pub fn degree(&self, n: NodeId) -> usize {
        self.incident(n).len()
    }
}
