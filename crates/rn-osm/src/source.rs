//! Road-network sources: where the raw directed multigraph comes from.
//!
//! [`RoadSource`] is the seam between acquisition and the rest of the
//! pipeline.  The exporter only sees a `RawNetwork` (or an error), so tests
//! and offline runs can swap the live provider for a saved response or an
//! extract on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use rn_core::NetworkType;
use rn_graph::RawNetwork;

use crate::cache::ResponseCache;
use crate::http::{HttpClient, HttpOptions};
use crate::nominatim::{Geocoder, NOMINATIM_URL};
use crate::overpass::{build_network, parse_response, OverpassClient, OVERPASS_URL};
use crate::query::{overpass_query, PlaceQuery, SearchArea};
use crate::{OsmError, OsmResult};

/// Anything that can produce the raw road network for a network type.
pub trait RoadSource {
    /// Human-readable description for logs and error messages.
    fn describe(&self) -> String;

    /// Acquire the network.  Implementations fail with
    /// [`OsmError::EmptyNetwork`] rather than return a network without edges.
    fn load(&self, network_type: NetworkType) -> OsmResult<RawNetwork>;
}

/// Provider endpoints and request settings for [`OverpassSource`].
#[derive(Clone, Debug)]
pub struct AcquireOptions {
    pub overpass_url:  String,
    pub nominatim_url: String,
    pub http:          HttpOptions,
    /// `[timeout:N]` server-side limit written into the query.
    pub timeout_s:     u64,
    /// Reuse Overpass responses saved under this directory.
    pub cache_dir:     Option<PathBuf>,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            overpass_url:  OVERPASS_URL.to_owned(),
            nominatim_url: NOMINATIM_URL.to_owned(),
            http:          HttpOptions::default(),
            timeout_s:     180,
            cache_dir:     None,
        }
    }
}

// ── Live provider ─────────────────────────────────────────────────────────────

/// Geocode (if needed), query Overpass, build the network.
pub struct OverpassSource {
    query:    PlaceQuery,
    opts:     AcquireOptions,
    geocoder: Geocoder,
    overpass: OverpassClient,
    cache:    Option<ResponseCache>,
}

impl OverpassSource {
    pub fn new(query: PlaceQuery, opts: AcquireOptions) -> OsmResult<Self> {
        let http = HttpClient::new(&opts.http)?;
        let geocoder = Geocoder::new(http.clone(), opts.nominatim_url.clone());
        let overpass = OverpassClient::new(http, opts.overpass_url.clone());
        let cache = opts.cache_dir.as_ref().map(ResponseCache::new);
        Ok(Self { query, opts, geocoder, overpass, cache })
    }

    fn search_area(&self) -> OsmResult<SearchArea> {
        match &self.query {
            PlaceQuery::Place(name)    => self.geocoder.resolve(name)?.search_area(),
            PlaceQuery::BoundingBox(b) => Ok(SearchArea::BoundingBox(*b)),
        }
    }

    fn fetch(&self, query: &str) -> OsmResult<String> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(query)? {
                return Ok(body);
            }
        }
        let body = self.overpass.fetch(query)?;
        if let Some(cache) = &self.cache {
            // Only cache bodies that parse; a runtime-error remark is not reusable.
            parse_response(&body)?;
            cache.put(query, &body)?;
        }
        Ok(body)
    }
}

impl RoadSource for OverpassSource {
    fn describe(&self) -> String {
        format!("Overpass {}", self.query)
    }

    fn load(&self, network_type: NetworkType) -> OsmResult<RawNetwork> {
        let area = self.search_area()?;
        info!(%area, %network_type, "requesting road network");
        let query = overpass_query(area, network_type, self.opts.timeout_s);
        let body = self.fetch(&query)?;
        let response = parse_response(&body)?;
        let network = build_network(&response, network_type)?;
        ensure_non_empty(network, network_type, &self.query.to_string())
    }
}

// ── Saved Overpass response ───────────────────────────────────────────────────

/// An Overpass JSON response previously saved to disk.
pub struct OverpassFileSource {
    path: PathBuf,
}

impl OverpassFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoadSource for OverpassFileSource {
    fn describe(&self) -> String {
        format!("Overpass response {}", self.path.display())
    }

    fn load(&self, network_type: NetworkType) -> OsmResult<RawNetwork> {
        info!(path = %self.path.display(), "reading saved Overpass response");
        let body = fs::read_to_string(&self.path)?;
        let response = parse_response(&body)?;
        let network = build_network(&response, network_type)?;
        ensure_non_empty(network, network_type, &self.path.display().to_string())
    }
}

// ── PBF extract ───────────────────────────────────────────────────────────────

#[cfg(feature = "pbf")]
pub struct PbfSource {
    path: PathBuf,
}

#[cfg(feature = "pbf")]
impl PbfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "pbf")]
impl RoadSource for PbfSource {
    fn describe(&self) -> String {
        format!("PBF extract {}", self.path.display())
    }

    fn load(&self, network_type: NetworkType) -> OsmResult<RawNetwork> {
        let network = crate::pbf::load_from_pbf(&self.path, network_type)?;
        ensure_non_empty(network, network_type, &self.path.display().to_string())
    }
}

/// Reject a network with no edges; an empty export is never useful.
pub fn ensure_non_empty(network: RawNetwork, network_type: NetworkType, area: &str) -> OsmResult<RawNetwork> {
    if network.is_empty() {
        return Err(OsmError::EmptyNetwork {
            network_type: network_type.to_string(),
            area:         area.to_owned(),
        });
    }
    Ok(network)
}
