//! OSM PBF loader, enabled with the `pbf` Cargo feature.
//!
//! An offline alternative to the Overpass API for regional extracts
//! (e.g. Geofabrik downloads).  Ways are selected with the same
//! [`WayFilter`] and one-way rules as the Overpass path, so both sources
//! yield the same network for the same data.
//!
//! # Memory note
//!
//! All OSM nodes are buffered in a map during the single pass because ways
//! reference nodes by id.  For a state-sized extract this is several million
//! entries.  The map is dropped before edges are built.

use std::path::Path;

use osmpbf::{Element, ElementReader};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{info, warn};

use rn_core::{GeoPoint, NetworkType, OsmNodeId, OsmWayId};
use rn_graph::{GraphError, RawNetwork, RawNetworkBuilder};

use crate::filter::{direction, Direction, WayFilter};
use crate::{OsmError, OsmResult};

struct PbfWay {
    id:        i64,
    refs:      Vec<i64>,
    direction: Direction,
}

/// Load the `network_type` road network from an OSM PBF file.
///
/// Nodes are numbered in ascending OSM id order.
///
/// # Errors
///
/// [`OsmError::Pbf`] on parse errors.
pub fn load_from_pbf(path: &Path, network_type: NetworkType) -> OsmResult<RawNetwork> {
    let filter = WayFilter::for_network(network_type);

    // ── Phase 1: all nodes + matching ways in one pass ────────────────────
    let reader = ElementReader::from_path(path).map_err(|e| OsmError::Pbf(e.to_string()))?;

    let mut all_nodes: FxHashMap<i64, GeoPoint> = FxHashMap::default();
    let mut ways: Vec<PbfWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                if filter.accepts(tag) {
                    ways.push(PbfWay {
                        id:        w.id(),
                        refs:      w.refs().collect(),
                        direction: direction(network_type, tag),
                    });
                }
            }
            _ => {}
        })
        .map_err(|e| OsmError::Pbf(e.to_string()))?;

    // ── Phase 2: road-referenced nodes, ascending id ──────────────────────
    let referenced: FxHashSet<i64> = ways.iter().flat_map(|w| w.refs.iter().copied()).collect();
    let mut ids: Vec<i64> = referenced.into_iter().collect();
    ids.sort_unstable();

    let mut builder = RawNetworkBuilder::with_capacity(ids.len(), ids.len() * 2);
    for id in ids {
        if let Some(&pos) = all_nodes.get(&id) {
            builder.add_node(OsmNodeId(id), pos);
        }
    }
    drop(all_nodes);

    // ── Phase 3: segments ─────────────────────────────────────────────────
    let mut missing = 0usize;
    for way in &ways {
        for pair in way.refs.windows(2) {
            let (a, b) = match way.direction {
                Direction::Reverse => (pair[1], pair[0]),
                _                  => (pair[0], pair[1]),
            };
            let oneway = way.direction != Direction::Both;
            match builder.connect(OsmNodeId(a), OsmNodeId(b), Some(OsmWayId(way.id)), oneway) {
                Ok(()) => {}
                Err(GraphError::UnknownNode(_)) => missing += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
    if missing > 0 {
        warn!(missing, "skipped segments referencing nodes absent from the extract");
    }

    let network = builder.build();
    info!(
        path = %path.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "loaded PBF road network"
    );
    Ok(network)
}
