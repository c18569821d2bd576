//! Graph-subsystem error type.

use thiserror::Error;

use rn_core::OsmNodeId;

/// Errors produced by `rn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("OSM node {0} has not been added to the network")]
    UnknownNode(OsmNodeId),

    #[error("{0} nodes cannot be relabeled into 32-bit vertex ids")]
    TooManyNodes(usize),

    #[error("unknown collapse policy {0:?} (expected shortest, first or last)")]
    UnknownCollapsePolicy(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
