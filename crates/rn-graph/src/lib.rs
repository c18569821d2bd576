//! `rn-graph` — road graph containers and the normalize → relabel transforms.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`raw`]        | `RawNetwork` (directed multigraph), `RawNetworkBuilder`  |
//! | [`undirected`] | `UndirectedGraph`, `UndirectedEdge`, CSR `Adjacency`      |
//! | [`normalize`]  | `normalize`, `CollapsePolicy`, `NormalizeOptions`         |
//! | [`simplify`]   | `simplify`, `SimplifyOptions`                             |
//! | [`components`] | `connected_components`, `largest_component`               |
//! | [`relabel`]    | `relabel`, `RelabeledGraph`, `NodeMapping`, `edge_weight` |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! # Pipeline
//!
//! ```text
//! RawNetwork ──simplify?──▶ RawNetwork ──normalize──▶ UndirectedGraph ──largest_component?──▶ relabel ──▶ RelabeledGraph + NodeMapping
//! ```
//!
//! Every stage preserves node order and first-seen edge order, so the final
//! vertex numbering is a pure function of the order in which the source
//! delivered nodes and ways.

pub mod components;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod relabel;
pub mod simplify;
pub mod undirected;


pub use components::{connected_components, largest_component, Components};
pub use error::{GraphError, GraphResult};
pub use normalize::{normalize, CollapsePolicy, NormalizeOptions};
pub use raw::{RawNetwork, RawNetworkBuilder};
pub use relabel::{edge_weight, relabel, NodeMapping, RelabeledEdge, RelabeledGraph, DEFAULT_WEIGHT};
pub use simplify::{simplify, SimplifyOptions};
pub use undirected::{Adjacency, UndirectedEdge, UndirectedGraph};
