//! `rn-core` — foundational types for the `roadnet` road-network exporter.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and only `thiserror` plus optional `serde`.
//!
//! # What lives here
//!
//! | Module             | Contents                                            |
//! |--------------------|-----------------------------------------------------|
//! | [`ids`]            | `NodeId`, `VertexId`, `OsmNodeId`, `OsmWayId`       |
//! | [`geo`]            | `GeoPoint`, `BoundingBox`, haversine distance       |
//! | [`network_type`]   | `NetworkType` enum (`drive`, `walk`, …)             |
//! | [`error`]          | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod network_type;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{NodeId, OsmNodeId, OsmWayId, VertexId};
pub use network_type::NetworkType;
