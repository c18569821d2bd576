//! Prim's minimum spanning tree.
//!
//! Road networks are not guaranteed connected, so the tree spans only the
//! component containing the start vertex.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use rn_core::VertexId;

use crate::graph::WeightedGraph;
use crate::AlgoResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub root:         VertexId,
    /// Tree parent of each vertex, indexed by `VertexId`.  `None` for the
    /// root, for slot 0, and for vertices outside the root's component.
    pub parent:       Vec<Option<VertexId>>,
    pub total_weight: u64,
    /// Vertices in the tree, the root included.
    pub vertex_count: usize,
}

impl SpanningTree {
    /// Tree edges as `(parent, child)`, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (p, VertexId(i as u32))))
    }

    pub fn edge_count(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }
}

/// Lazy Prim from `root`: grow the tree by the lightest edge leaving it.
///
/// # Errors
///
/// [`crate::AlgoError::SourceOutOfRange`] if `root` is not in `1..=V`.
pub fn prim_mst(graph: &WeightedGraph, root: VertexId) -> AlgoResult<SpanningTree> {
    graph.check_source(root)?;

    let slots = graph.vertex_count() as usize + 1;
    let mut in_tree = vec![false; slots];
    let mut parent = vec![None; slots];
    let mut total_weight = 0u64;
    let mut vertex_count = 0usize;

    // (weight, vertex, via).  Ties break on the smaller vertex, then parent.
    let mut heap: BinaryHeap<Reverse<(u64, VertexId, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, root, VertexId::INVALID)));

    while let Some(Reverse((w, v, via))) = heap.pop() {
        if in_tree[v.index()] {
            continue;
        }
        in_tree[v.index()] = true;
        vertex_count += 1;
        if v != root {
            parent[v.index()] = Some(via);
            total_weight = total_weight.saturating_add(w);
        }
        for (u, weight) in graph.neighbors(v) {
            if !in_tree[u.index()] {
                heap.push(Reverse((weight, u, v)));
            }
        }
    }

    debug!(%root, vertex_count, total_weight, "spanning tree complete");
    Ok(SpanningTree { root, parent, total_weight, vertex_count })
}
