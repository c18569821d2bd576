//! What to acquire: place queries, search areas, and Overpass QL.

use rn_core::{BoundingBox, NetworkType};

use crate::filter::WayFilter;

/// Overpass derives area ids from OSM ids by these offsets.
const RELATION_AREA_OFFSET: i64 = 3_600_000_000;
const WAY_AREA_OFFSET: i64 = 2_400_000_000;

/// User-level description of the region to export.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceQuery {
    /// Free-text place name, resolved through the geocoder.
    Place(String),
    /// Explicit `south, west, north, east` rectangle; no geocoding.
    BoundingBox(BoundingBox),
}

impl std::fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceQuery::Place(name)     => write!(f, "{name:?}"),
            PlaceQuery::BoundingBox(b)  => write!(f, "bbox({b})"),
        }
    }
}

/// Region in the form Overpass understands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchArea {
    /// Overpass area id (an OSM relation or closed way boundary).
    Area(i64),
    BoundingBox(BoundingBox),
}

impl SearchArea {
    pub fn from_relation(relation_id: i64) -> Self {
        SearchArea::Area(RELATION_AREA_OFFSET + relation_id)
    }

    pub fn from_way(way_id: i64) -> Self {
        SearchArea::Area(WAY_AREA_OFFSET + way_id)
    }
}

impl std::fmt::Display for SearchArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchArea::Area(id)        => write!(f, "area {id}"),
            SearchArea::BoundingBox(b)  => write!(f, "bbox {b}"),
        }
    }
}

/// Build the Overpass QL request for every way of `network_type` inside
/// `area`, recursing down to the ways' nodes.
pub fn overpass_query(area: SearchArea, network_type: NetworkType, timeout_s: u64) -> String {
    let selector = WayFilter::for_network(network_type).overpass_selector();
    match area {
        SearchArea::Area(id) => format!(
            "[out:json][timeout:{timeout_s}];\n\
             area({id})->.searchArea;\n\
             (way{selector}(area.searchArea););\n\
             (._;>;);\n\
             out body;"
        ),
        SearchArea::BoundingBox(b) => format!(
            "[out:json][timeout:{timeout_s}];\n\
             (way{selector}({},{},{},{}););\n\
             (._;>;);\n\
             out body;",
            b.south, b.west, b.north, b.east
        ),
    }
}
