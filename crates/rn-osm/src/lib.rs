//! `rn-osm` — OpenStreetMap road-network acquisition.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`filter`]    | Per-network-type way filters, one-way interpretation          |
//! | [`query`]     | `PlaceQuery`, `SearchArea`, Overpass QL generation            |
//! | [`http`]      | Blocking HTTP client shared by both providers                 |
//! | [`nominatim`] | Place-name geocoding                                          |
//! | [`overpass`]  | Overpass client, response types, response → `RawNetwork`     |
//! | [`cache`]     | On-disk Overpass response cache                               |
//! | [`source`]    | `RoadSource` trait and its implementations                    |
//! | `pbf`         | OSM PBF loader (`pbf` feature)                                |
//! | [`error`]     | `OsmError`, `OsmResult<T>`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                         |
//! |---------|------------------------------------------------|
//! | `pbf`   | `load_from_pbf` and `PbfSource` via `osmpbf`   |
//! | `serde` | Propagates serde derives to `rn-core`/`rn-graph` |

pub mod cache;
pub mod error;
pub mod filter;
pub mod http;
pub mod nominatim;
pub mod overpass;
pub mod query;
pub mod source;

#[cfg(feature = "pbf")]
pub mod pbf;

#[cfg(test)]
mod tests;

pub use cache::ResponseCache;
pub use error::{OsmError, OsmResult};
pub use filter::{direction, Direction, WayFilter};
pub use http::{HttpClient, HttpOptions};
pub use nominatim::{parse_search_response, Geocoder, PlaceKind, ResolvedPlace, NOMINATIM_URL};
pub use overpass::{build_network, parse_response, OverpassClient, OverpassResponse, OVERPASS_URL};
pub use query::{overpass_query, PlaceQuery, SearchArea};
pub use source::{ensure_non_empty, AcquireOptions, OverpassFileSource, OverpassSource, RoadSource};

#[cfg(feature = "pbf")]
pub use pbf::load_from_pbf;
#[cfg(feature = "pbf")]
pub use source::PbfSource;
