//! Graph storage and path-finding operations
//!
//! Provides a generic directed, edge-labeled graph and two searches over it:
//! - BFS for minimum-hop paths with deterministic tie-breaking
//! - Dijkstra for minimum-cost paths over non-negative weights
//! - Graph provider trait for the read side the searches depend on

pub mod adjacency;
pub mod bfs;
pub mod dijkstra;
pub mod path;
pub mod traversal;
pub mod types;

pub use adjacency::{Graph, GraphBuilder};
pub use bfs::bfs_find_path;
pub use dijkstra::dijkstra_find_path;
pub use path::Path;
pub use traversal::GraphProvider;
pub use types::{Edge, Segment, Weight};
