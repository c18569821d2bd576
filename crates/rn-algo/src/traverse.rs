//! Breadth-first and depth-first visit orders.
//!
//! Neighbours are explored in adjacency order (the order edges appear in the
//! file).  Only the source's component is visited.

use std::collections::VecDeque;

use rn_core::VertexId;

use crate::graph::WeightedGraph;
use crate::AlgoResult;

pub fn breadth_first(graph: &WeightedGraph, source: VertexId) -> AlgoResult<Vec<VertexId>> {
    graph.check_source(source)?;

    let mut seen = vec![false; graph.vertex_count() as usize + 1];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([source]);
    seen[source.index()] = true;

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for (w, _) in graph.neighbors(v) {
            if !seen[w.index()] {
                seen[w.index()] = true;
                queue.push_back(w);
            }
        }
    }
    Ok(order)
}

/// Pre-order depth-first traversal.  Equivalent to the recursive version but
/// with an explicit stack, so long road chains cannot overflow the call stack.
pub fn depth_first(graph: &WeightedGraph, source: VertexId) -> AlgoResult<Vec<VertexId>> {
    graph.check_source(source)?;

    let mut seen = vec![false; graph.vertex_count() as usize + 1];
    let mut order = vec![source];
    seen[source.index()] = true;

    let mut stack = vec![graph.neighbors(source)];
    while let Some(top) = stack.last_mut() {
        match top.find(|(w, _)| !seen[w.index()]) {
            Some((w, _)) => {
                seen[w.index()] = true;
                order.push(w);
                stack.push(graph.neighbors(w));
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(order)
}
