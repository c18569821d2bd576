//! `rn-io` — roadnet file formats.
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`adjacency`]   | `V E` / `u v w` writer and reader                          |
//! | [`validate`]    | `validate`, `ValidationReport`                             |
//! | [`mapping`]     | `vertex_id,osm_id,lat,lon` CSV sidecar                      |
//! | [`error`]       | `FormatError`, `FormatResult<T>`                           |

pub mod adjacency;
pub mod error;
pub mod mapping;
pub mod validate;

#[cfg(test)]
mod tests;

pub use adjacency::{
    read_adjacency, read_adjacency_file, write_adjacency, write_adjacency_file, AdjacencyFile,
    AdjacencyRecord,
};
pub use error::{FormatError, FormatResult};
pub use mapping::{write_mapping, write_mapping_file, MAPPING_HEADER};
pub use validate::{validate, ValidationReport};
