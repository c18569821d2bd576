//! Connected components and largest-component retention.

use std::collections::VecDeque;

use tracing::debug;

use rn_core::NodeId;

use crate::undirected::UndirectedGraph;

/// Component label per node plus component sizes.
///
/// Labels are assigned in node order: component 0 contains node 0, the next
/// unlabeled node starts component 1, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    pub label: Vec<u32>,
    pub sizes: Vec<usize>,
}

impl Components {
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Label of the largest component; ties go to the smaller label.
    pub fn largest(&self) -> Option<u32> {
        self.sizes
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(i, _)| i as u32)
    }
}

/// Label the connected components of `graph` with a breadth-first sweep.
pub fn connected_components(graph: &UndirectedGraph) -> Components {
    let n = graph.node_count();
    let adj = graph.adjacency();

    let mut label = vec![u32::MAX; n];
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for root in 0..n {
        if label[root] != u32::MAX {
            continue;
        }
        let comp = sizes.len() as u32;
        label[root] = comp;
        queue.push_back(NodeId(root as u32));
        let mut size = 0usize;

        while let Some(node) = queue.pop_front() {
            size += 1;
            for &(nbr, _) in adj.incident(node) {
                if label[nbr.index()] == u32::MAX {
                    label[nbr.index()] = comp;
                    queue.push_back(nbr);
                }
            }
        }
        sizes.push(size);
    }

    Components { label, sizes }
}

/// Keep only the largest connected component.
///
/// An empty graph is returned unchanged.
pub fn largest_component(graph: &UndirectedGraph) -> UndirectedGraph {
    let comps = connected_components(graph);
    let Some(keep_label) = comps.largest() else {
        return graph.clone();
    };
    if comps.count() == 1 {
        return graph.clone();
    }

    let keep: Vec<bool> = comps.label.iter().map(|&l| l == keep_label).collect();
    let out = graph.induced(&keep);

    debug!(
        components = comps.count(),
        kept_nodes = out.node_count(),
        dropped_nodes = graph.node_count() - out.node_count(),
        "retained largest connected component"
    );
    out
}
