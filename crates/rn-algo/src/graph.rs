//! Undirected weighted graph over 1-based vertices.
//!
//! # Data layout
//!
//! CSR, like the routing graphs elsewhere in the workspace, but symmetric:
//! every edge `u v w` is stored twice, once under `u` and once under `v`.
//!
//! ```text
//! first_arc[v] .. first_arc[v+1]   → arcs leaving v       (slot 0 unused)
//! arc_head[a], arc_weight[a]       → one entry per arc
//! ```
//!
//! Arcs leaving a vertex keep the order their edges had in the file, so
//! traversal orders are deterministic.  A self-loop is stored once.

use rn_core::VertexId;
use rn_io::AdjacencyFile;

use crate::{AlgoError, AlgoResult};

/// Vertices allowed beyond the `2 × E` that edges can touch.  Isolated
/// vertices are legal, but `V` sizes every per-vertex array.
pub const MAX_ISOLATED_VERTICES: usize = 1 << 20;

pub struct WeightedGraph {
    vertex_count: u32,
    edge_count:   usize,
    first_arc:    Vec<usize>,
    arc_head:     Vec<VertexId>,
    arc_weight:   Vec<u64>,
}

impl WeightedGraph {
    /// Build from `(u, v, weight)` triples.
    ///
    /// # Errors
    ///
    /// [`AlgoError::VertexOutOfRange`] if an endpoint is outside
    /// `1..=vertex_count`; [`AlgoError::TooManyVertices`] if `vertex_count`
    /// exceeds `2 × edges + MAX_ISOLATED_VERTICES`.
    pub fn from_edges(
        vertex_count: u32,
        edges: impl IntoIterator<Item = (VertexId, VertexId, u64)>,
    ) -> AlgoResult<Self> {
        let edges: Vec<(VertexId, VertexId, u64)> = edges.into_iter().collect();
        if vertex_count as usize > 2 * edges.len() + MAX_ISOLATED_VERTICES {
            return Err(AlgoError::TooManyVertices { vertex_count, edge_count: edges.len() });
        }
        let slots = vertex_count as usize + 2;

        // ── Count degrees ─────────────────────────────────────────────────
        let mut first_arc = vec![0usize; slots];
        for (i, &(u, v, _)) in edges.iter().enumerate() {
            for x in [u, v] {
                if x.0 == 0 || x.0 > vertex_count {
                    return Err(AlgoError::VertexOutOfRange { edge: i, vertex: x, vertex_count });
                }
            }
            first_arc[u.index() + 1] += 1;
            if u != v {
                first_arc[v.index() + 1] += 1;
            }
        }

        // ── Prefix sum → offsets ──────────────────────────────────────────
        for i in 1..slots {
            first_arc[i] += first_arc[i - 1];
        }

        // ── Scatter, preserving edge order per vertex ─────────────────────
        let arcs = first_arc[slots - 1];
        let mut cursor = first_arc.clone();
        let mut arc_head = vec![VertexId::INVALID; arcs];
        let mut arc_weight = vec![0u64; arcs];
        for &(u, v, w) in &edges {
            let a = cursor[u.index()];
            arc_head[a] = v;
            arc_weight[a] = w;
            cursor[u.index()] += 1;
            if u != v {
                let b = cursor[v.index()];
                arc_head[b] = u;
                arc_weight[b] = w;
                cursor[v.index()] += 1;
            }
        }

        Ok(Self { vertex_count, edge_count: edges.len(), first_arc, arc_head, arc_weight })
    }

    pub fn from_adjacency(file: &AdjacencyFile) -> AlgoResult<Self> {
        Self::from_edges(file.vertex_count, file.edges.iter().map(|r| (r.u, r.v, r.weight)))
    }

    /// `V`.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertices `1..=V`.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (1..=self.vertex_count).map(VertexId)
    }

    /// `(neighbor, weight)` for every edge at `v`, in file order.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, u64)> + '_ {
        let range = self.first_arc[v.index()]..self.first_arc[v.index() + 1];
        self.arc_head[range.clone()].iter().copied().zip(self.arc_weight[range].iter().copied())
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.first_arc[v.index() + 1] - self.first_arc[v.index()]
    }

    /// `true` if `v` lies in `1..=V`.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        (1..=self.vertex_count).contains(&v.0)
    }

    /// Check `source` against `1..=V`.
    pub(crate) fn check_source(&self, source: VertexId) -> AlgoResult<()> {
        if !self.contains(source) {
            return Err(AlgoError::SourceOutOfRange { vertex: source, vertex_count: self.vertex_count });
        }
        Ok(())
    }
}
