//! Overpass API client, response types, and response → `RawNetwork`.
//!
//! # What is loaded
//!
//! Only ways accepted by the network type's [`WayFilter`] are used, even if
//! the response contains more (a saved file may come from a broader query).
//! Each consecutive node pair of a way becomes one segment whose length is
//! the great-circle distance between the nodes.  One-way ways add a single
//! directed edge; two-way ways add both directions.
//!
//! # Node order
//!
//! Nodes are added in the order their elements appear in the response,
//! restricted to nodes referenced by a kept way.  Overpass `out body` emits
//! nodes sorted by id, so the order is deterministic for a given response.

use std::collections::HashMap;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::{debug, info, warn};

use rn_core::{GeoPoint, NetworkType, OsmNodeId, OsmWayId};
use rn_graph::{GraphError, RawNetwork, RawNetworkBuilder};

use crate::filter::{direction, Direction, WayFilter};
use crate::http::HttpClient;
use crate::{OsmError, OsmResult};

pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OsmElement>,
    /// Set by Overpass when the query hit a runtime error (often a timeout)
    /// even though the HTTP status is 200.
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct OsmElement {
    #[serde(rename = "type")]
    pub kind:  ElementKind,
    pub id:    i64,
    #[serde(default)]
    pub lat:   Option<f64>,
    #[serde(default)]
    pub lon:   Option<f64>,
    #[serde(default)]
    pub nodes: Option<Vec<i64>>,
    #[serde(default)]
    pub tags:  HashMap<String, String>,
}

impl OsmElement {
    #[inline]
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Parse an Overpass JSON body.
///
/// # Errors
///
/// [`OsmError::Json`] on malformed JSON; [`OsmError::Malformed`] when
/// Overpass reports a runtime error in `remark`.
pub fn parse_response(body: &str) -> OsmResult<OverpassResponse> {
    let response: OverpassResponse = serde_json::from_str(body)?;
    if let Some(remark) = &response.remark {
        if remark.contains("runtime error") {
            return Err(OsmError::Malformed(format!("Overpass: {remark}")));
        }
        warn!(remark, "Overpass remark");
    }
    Ok(response)
}

// ── Network construction ──────────────────────────────────────────────────────

struct KeptWay<'a> {
    id:        i64,
    refs:      &'a [i64],
    direction: Direction,
}

/// Build the directed multigraph for `network_type` from a parsed response.
pub fn build_network(response: &OverpassResponse, network_type: NetworkType) -> OsmResult<RawNetwork> {
    let filter = WayFilter::for_network(network_type);

    // ── Phase 1: keep matching ways ───────────────────────────────────────
    let mut ways: Vec<KeptWay<'_>> = Vec::new();
    let mut rejected = 0usize;
    for elem in response.elements.iter().filter(|e| e.kind == ElementKind::Way) {
        let Some(refs) = elem.nodes.as_deref() else { continue };
        if !filter.accepts(|k| elem.tag(k)) {
            rejected += 1;
            continue;
        }
        ways.push(KeptWay { id: elem.id, refs, direction: direction(network_type, |k| elem.tag(k)) });
    }

    // ── Phase 2: road-referenced nodes, in response order ─────────────────
    let referenced: FxHashSet<i64> = ways.iter().flat_map(|w| w.refs.iter().copied()).collect();

    let mut builder = RawNetworkBuilder::with_capacity(referenced.len(), referenced.len() * 2);
    for elem in response.elements.iter().filter(|e| e.kind == ElementKind::Node) {
        if !referenced.contains(&elem.id) {
            continue;
        }
        if let (Some(lat), Some(lon)) = (elem.lat, elem.lon) {
            builder.add_node(OsmNodeId(elem.id), GeoPoint::new(lat, lon));
        }
    }

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
        warn!(missing, "skipped segments referencing nodes absent from the response");
    }
    debug!(kept_ways = ways.len(), rejected_ways = rejected, "filtered ways");

    let network = builder.build();
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        ways = ways.len(),
        "built raw road network"
    );
    Ok(network)
}

// ── Client ────────────────────────────────────────────────────────────────────

pub struct OverpassClient {
    http:     HttpClient,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    /// Run `query` and return the raw JSON body.
    pub fn fetch(&self, query: &str) -> OsmResult<String> {
        debug!("Overpass query:\n{query}");
        info!(endpoint = %self.endpoint, "sending request to Overpass API");
        let body = self.http.post_text("Overpass", &self.endpoint, query.to_owned())?;
        info!(bytes = body.len(), "received Overpass response");
        Ok(body)
    }
}
