//! Topology simplification on the directed raw network.
//!
//! A node is an **endpoint** when any of these hold:
//!
//! - it has a self-loop;
//! - it has no incoming edge or no outgoing edge;
//! - its distinct neighbours (predecessors ∪ successors) are not exactly
//!   two, or its degree (in + out) is neither 2 nor 4;
//! - with [`SimplifyOptions::strict`], its incident edges belong to more
//!   than one OSM way.
//!
//! Every other node is interstitial.  Each directed path from an endpoint
//! through interstitial nodes to the next endpoint becomes one edge carrying
//! the summed length and the way of its first segment.  A two-way street
//! therefore yields one merged edge per direction, a one-way street one.
//!
//! Output edges follow raw edge order: every raw edge leaving an endpoint is
//! emitted in place, either unchanged or as the head of its merged path.
//! Endpoints keep their relative node order.
//!
//! A ring made only of interstitial nodes has no endpoint; its smallest node
//! is promoted to endpoint and the ring becomes self-loops on it.
//! Parallel edges created by merging are left for
//! [`normalize`](crate::normalize::normalize) to collapse.

use tracing::debug;

use rn_core::{NodeId, OsmWayId};

use crate::raw::{RawNetwork, RawNetworkBuilder};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Keep nodes where two different OSM ways meet, even mid-road.
    pub strict: bool,
}

/// Remove interstitial nodes from `raw`.
pub fn simplify(raw: &RawNetwork, opts: SimplifyOptions) -> RawNetwork {
    let n = raw.node_count();
    let inc = Incidence::new(raw);

    let endpoint: Vec<bool> = (0..n)
        .map(|i| is_endpoint(raw, &inc, NodeId(i as u32), opts))
        .collect();

    let mut walker = Walker {
        raw,
        inc: &inc,
        endpoint,
        visited: vec![false; raw.edge_count()],
        stamp:   vec![0; n],
        path_id: 0,
        merged:  Vec::with_capacity(raw.edge_count()),
    };

    // ── Paths leaving endpoints, in raw edge order ────────────────────────
    for e in 0..raw.edge_count() {
        if walker.endpoint[raw.edge_from[e].index()] {
            walker.walk(e);
        }
    }

    // ── Pure rings ────────────────────────────────────────────────────────
    let mut rings = 0usize;
    for i in 0..n {
        for &e in inc.outgoing(NodeId(i as u32)) {
            if walker.visited[e] {
                continue;
            }
            if !walker.endpoint[i] {
                walker.endpoint[i] = true;
                rings += 1;
            }
            walker.walk(e);
        }
    }

    // ── Compact the node set to endpoints ─────────────────────────────────
    let kept = walker.endpoint.iter().filter(|&&k| k).count();
    let mut b = RawNetworkBuilder::with_capacity(kept, walker.merged.len());
    let mut remap = vec![NodeId::INVALID; n];
    for i in (0..n).filter(|&i| walker.endpoint[i]) {
        remap[i] = b.add_node(raw.node_osm_id[i], raw.node_pos[i]);
    }
    for &(from, to, length_m, way) in &walker.merged {
        b.add_directed_edge(remap[from.index()], remap[to.index()], length_m, way);
    }
    let out = b.build();

    debug!(
        nodes_before = n,
        nodes_after = out.node_count(),
        edges_before = raw.edge_count(),
        edges_after = out.edge_count(),
        rings,
        strict = opts.strict,
        "simplified road network"
    );

    out
}

fn is_endpoint(raw: &RawNetwork, inc: &Incidence, node: NodeId, opts: SimplifyOptions) -> bool {
    let outgoing = inc.outgoing(node);
    let incoming = inc.incoming(node);

    if outgoing.is_empty() || incoming.is_empty() {
        return true;
    }
    if outgoing.iter().any(|&e| raw.edge_to[e] == node) {
        return true;
    }
    let degree = outgoing.len() + incoming.len();
    if degree != 2 && degree != 4 {
        return true;
    }

    let mut neighbours: Vec<NodeId> = outgoing
        .iter()
        .map(|&e| raw.edge_to[e])
        .chain(incoming.iter().map(|&e| raw.edge_from[e]))
        .collect();
    neighbours.sort_unstable();
    neighbours.dedup();
    if neighbours.len() != 2 {
        return true;
    }

    if opts.strict {
        let way = raw.edge_way[outgoing[0]];
        return outgoing.iter().chain(incoming).any(|&e| raw.edge_way[e] != way);
    }
    false
}

// ── Incidence ─────────────────────────────────────────────────────────────────

/// Directed CSR over a raw network.  Each node's outgoing and incoming raw
/// edge indices, in source order.
struct Incidence {
    first_out: Vec<usize>,
    out_edge:  Vec<usize>,
    first_in:  Vec<usize>,
    in_edge:   Vec<usize>,
}

impl Incidence {
    fn new(raw: &RawNetwork) -> Self {
        let (first_out, out_edge) = bucket(raw.node_count(), &raw.edge_from);
        let (first_in, in_edge) = bucket(raw.node_count(), &raw.edge_to);
        Self { first_out, out_edge, first_in, in_edge }
    }

    #[inline]
    fn outgoing(&self, n: NodeId) -> &[usize] {
        &self.out_edge[self.first_out[n.index()]..self.first_out[n.index() + 1]]
    }

    #[inline]
    fn incoming(&self, n: NodeId) -> &[usize] {
        &self.in_edge[self.first_in[n.index()]..self.first_in[n.index() + 1]]
    }
}

/// Stable counting sort of edge indices by `key[e]`.
fn bucket(n: usize, key: &[NodeId]) -> (Vec<usize>, Vec<usize>) {
    let mut first = vec![0usize; n + 1];
    for k in key {
        first[k.index() + 1] += 1;
    }
    for i in 1..=n {
        first[i] += first[i - 1];
    }
    let mut cursor = first.clone();
    let mut edges = vec![0usize; key.len()];
    for (e, k) in key.iter().enumerate() {
        edges[cursor[k.index()]] = e;
        cursor[k.index()] += 1;
    }
    (first, edges)
}

// ── Walker ────────────────────────────────────────────────────────────────────

struct Walker<'a> {
    raw:      &'a RawNetwork,
    inc:      &'a Incidence,
    endpoint: Vec<bool>,
    /// Raw edges already absorbed into an output edge.
    visited:  Vec<bool>,
    /// Id of the last path that passed through each node.
    stamp:    Vec<u32>,
    path_id:  u32,
    merged:   Vec<(NodeId, NodeId, Option<f64>, Option<OsmWayId>)>,
}

impl Walker<'_> {
    /// Emit the output edge that starts with raw edge `first`.
    fn walk(&mut self, first: usize) {
        if self.visited[first] {
            return;
        }
        let (raw, inc) = (self.raw, self.inc);
        let start = raw.edge_from[first];
        let head = raw.edge_to[first];
        let way = raw.edge_way[first];

        if self.endpoint[head.index()] {
            self.visited[first] = true;
            self.merged.push((start, head, raw.edge_length_m[first], way));
            return;
        }

        self.path_id += 1;
        let id = self.path_id;
        self.stamp[start.index()] = id;
        self.stamp[head.index()] = id;

        let mut length = self.absorb(start, head);
        let mut cur = head;
        while !self.endpoint[cur.index()] {
            let stamp = &self.stamp;
            let next = inc
                .outgoing(cur)
                .iter()
                .map(|&e| raw.edge_to[e])
                .find(|n| stamp[n.index()] != id);

            match next {
                Some(n) => {
                    length = add_length(length, self.absorb(cur, n));
                    self.stamp[n.index()] = id;
                    cur = n;
                }
                None => {
                    // Every successor is already on the path: the path closes
                    // back onto its start, or stops here.
                    if inc.outgoing(cur).iter().any(|&e| raw.edge_to[e] == start) {
                        length = add_length(length, self.absorb(cur, start));
                        cur = start;
                    } else {
                        self.endpoint[cur.index()] = true;
                    }
                    break;
                }
            }
        }

        self.merged.push((start, cur, length, way));
    }

    /// Mark every `from → to` raw edge visited and return the length of the
    /// first one.
    fn absorb(&mut self, from: NodeId, to: NodeId) -> Option<f64> {
        let (raw, inc) = (self.raw, self.inc);
        let mut length = None;
        let mut seen = false;
        for &e in inc.outgoing(from) {
            if raw.edge_to[e] == to {
                if !seen {
                    length = raw.edge_length_m[e];
                    seen = true;
                }
                self.visited[e] = true;
            }
        }
        length
    }
}

/// Sum segment lengths; a missing segment contributes nothing, and the sum is
/// missing only if every segment is.
#[inline]
fn add_length(acc: Option<f64>, seg: Option<f64>) -> Option<f64> {
    match (acc, seg) {
        (Some(a), Some(s)) => Some(a + s),
        (Some(a), None)    => Some(a),
        (None, s)          => s,
    }
}
