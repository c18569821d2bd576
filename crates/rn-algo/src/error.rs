//! Algorithm error type.

use thiserror::Error;

use rn_core::VertexId;

/// Errors produced by `rn-algo`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgoError {
    #[error("start vertex {vertex} is outside 1..={vertex_count}")]
    SourceOutOfRange { vertex: VertexId, vertex_count: u32 },

    #[error("edge {edge} references vertex {vertex}, outside 1..={vertex_count}")]
    VertexOutOfRange { edge: usize, vertex: VertexId, vertex_count: u32 },

    #[error("{vertex_count} vertices is implausible for {edge_count} edges")]
    TooManyVertices { vertex_count: u32, edge_count: usize },
}

pub type AlgoResult<T> = Result<T, AlgoError>;
