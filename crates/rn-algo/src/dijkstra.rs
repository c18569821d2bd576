//! Single-source shortest paths.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use rn_core::VertexId;

use crate::graph::WeightedGraph;
use crate::AlgoResult;

/// Distances and predecessors from one source.  Both vectors are indexed by
/// `VertexId` (slot 0 unused) and hold `None` for unreachable vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub source: VertexId,
    pub dist:   Vec<Option<u64>>,
    pub parent: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn distance(&self, v: VertexId) -> Option<u64> {
        self.dist.get(v.index()).copied().flatten()
    }

    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(v.index()).copied().flatten()
    }

    /// Vertices reachable from the source, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// Vertex sequence from the source to `target`, or `None` if unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.parent(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra over non-negative integer weights.
///
/// # Errors
///
/// [`crate::AlgoError::SourceOutOfRange`] if `source` is not in `1..=V`.
pub fn dijkstra(graph: &WeightedGraph, source: VertexId) -> AlgoResult<ShortestPathTree> {
    graph.check_source(source)?;

    let slots = graph.vertex_count() as usize + 1;
    // dist[v] = best known distance; u64::MAX = unreached.
    let mut dist = vec![u64::MAX; slots];
    let mut parent = vec![None; slots];
    dist[source.index()] = 0;

    // Min-heap: (distance, vertex).  Ties break on the smaller vertex.
    let mut heap: BinaryHeap<Reverse<(u64, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, v))) = heap.pop() {
        // Skip stale heap entries.
        if d > dist[v.index()] {
            continue;
        }
        for (w, weight) in graph.neighbors(v) {
            let nd = d.saturating_add(weight);
            if nd < dist[w.index()] {
                dist[w.index()] = nd;
                parent[w.index()] = Some(v);
                heap.push(Reverse((nd, w)));
            }
        }
    }

    let dist: Vec<Option<u64>> = dist
        .into_iter()
        .enumerate()
        .map(|(i, d)| (i > 0 && d != u64::MAX).then_some(d))
        .collect();

    let tree = ShortestPathTree { source, dist, parent };
    debug!(%source, reached = tree.reached(), "shortest-path tree complete");
    Ok(tree)
}
