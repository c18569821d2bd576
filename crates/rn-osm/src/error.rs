//! Acquisition error type.

use thiserror::Error;

use rn_graph::GraphError;

/// Errors produced by `rn-osm`.
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("HTTP request to {service} failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source:  reqwest::Error,
    },

    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status:  reqwest::StatusCode,
    },

    #[error("place {0:?} could not be resolved by the geocoder")]
    PlaceNotFound(String),

    #[error("no {network_type} road segments found for {area}")]
    EmptyNetwork { network_type: String, area: String },

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[cfg(feature = "pbf")]
    #[error("OSM PBF parse error: {0}")]
    Pbf(String),
}

pub type OsmResult<T> = Result<T, OsmError>;
