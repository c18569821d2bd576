//! Place-name resolution through Nominatim.
//!
//! Areas are preferred: the first hit that is an OSM relation or way becomes
//! an Overpass area id.  When no hit is an area, the first hit's bounding box
//! is used instead.

use serde::Deserialize;
use tracing::{info, warn};

use rn_core::BoundingBox;

use crate::http::HttpClient;
use crate::query::SearchArea;
use crate::{OsmError, OsmResult};

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    osm_type:     Option<String>,
    #[serde(default)]
    osm_id:       Option<i64>,
    #[serde(default)]
    display_name: String,
    /// `[south, north, west, east]` as decimal strings.
    #[serde(default)]
    boundingbox:  Option<Vec<String>>,
}

/// The geocoder's answer for one place name.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPlace {
    pub display_name: String,
    pub kind:         PlaceKind,
    pub osm_id:       Option<i64>,
    pub bbox:         Option<BoundingBox>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceKind {
    Relation,
    Way,
    Node,
    Other,
}

impl ResolvedPlace {
    /// Convert to an Overpass search area.
    ///
    /// # Errors
    ///
    /// [`OsmError::Malformed`] if the hit is neither an area nor carries a
    /// bounding box.
    pub fn search_area(&self) -> OsmResult<SearchArea> {
        match (self.kind, self.osm_id, self.bbox) {
            (PlaceKind::Relation, Some(id), _) => Ok(SearchArea::from_relation(id)),
            (PlaceKind::Way, Some(id), _)      => Ok(SearchArea::from_way(id)),
            (_, _, Some(b))                    => Ok(SearchArea::BoundingBox(b)),
            _ => Err(OsmError::Malformed(format!(
                "geocoder hit {:?} has neither an area id nor a bounding box",
                self.display_name
            ))),
        }
    }
}

/// Parse a Nominatim `format=json` search response for `place`.
///
/// # Errors
///
/// [`OsmError::PlaceNotFound`] when the hit list is empty.
pub fn parse_search_response(body: &str, place: &str) -> OsmResult<ResolvedPlace> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    let chosen = hits
        .iter()
        .find(|h| matches!(h.osm_type.as_deref(), Some("relation" | "way")))
        .or_else(|| hits.first())
        .ok_or_else(|| OsmError::PlaceNotFound(place.to_owned()))?;

    let kind = match chosen.osm_type.as_deref() {
        Some("relation") => PlaceKind::Relation,
        Some("way")      => PlaceKind::Way,
        Some("node")     => PlaceKind::Node,
        _                => PlaceKind::Other,
    };

    let bbox = match chosen.boundingbox.as_deref() {
        Some(raw) => parse_bbox(raw),
        None => None,
    };

    Ok(ResolvedPlace {
        display_name: chosen.display_name.clone(),
        kind,
        osm_id: chosen.osm_id,
        bbox,
    })
}

/// Nominatim orders the box `[south, north, west, east]`.
fn parse_bbox(raw: &[String]) -> Option<BoundingBox> {
    let vals: Vec<f64> = raw.iter().filter_map(|s| s.parse().ok()).collect();
    let &[south, north, west, east] = vals.as_slice() else {
        warn!(?raw, "ignoring malformed geocoder bounding box");
        return None;
    };
    BoundingBox::new(south, west, north, east).ok()
}

// ── Geocoder ──────────────────────────────────────────────────────────────────

pub struct Geocoder {
    http:     HttpClient,
    endpoint: String,
}

impl Geocoder {
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    /// Resolve `place` to its best matching OSM object.
    pub fn resolve(&self, place: &str) -> OsmResult<ResolvedPlace> {
        info!(place, "geocoding place name");
        let body = self.http.get_text(
            "Nominatim",
            &self.endpoint,
            &[("q", place), ("format", "json"), ("limit", "10"), ("dedupe", "0")],
        )?;
        let resolved = parse_search_response(&body, place)?;
        info!(
            display_name = %resolved.display_name,
            kind = ?resolved.kind,
            osm_id = ?resolved.osm_id,
            "place resolved"
        );
        Ok(resolved)
    }
}
