//! `rn-algo` — graph algorithms over exported road networks.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`graph`]     | `WeightedGraph` (symmetric CSR, 1-based vertices) |
//! | [`dijkstra`]  | `dijkstra`, `ShortestPathTree`                    |
//! | [`mst`]       | `prim_mst`, `SpanningTree`                        |
//! | [`traverse`]  | `breadth_first`, `depth_first`                    |
//! | [`error`]     | `AlgoError`, `AlgoResult<T>`                      |
//!
//! ```rust,ignore
//! let file = rn_io::read_adjacency_file(Path::new("nyc_road_network.txt"))?;
//! let graph = WeightedGraph::from_adjacency(&file)?;
//! let spt = dijkstra(&graph, VertexId(1))?;
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod mst;
pub mod traverse;


pub use dijkstra::{dijkstra, ShortestPathTree};
pub use error::{AlgoError, AlgoResult};
pub use graph::{WeightedGraph, MAX_ISOLATED_VERTICES};
pub use mst::{prim_mst, SpanningTree};
pub use traverse::{breadth_first, depth_first};
