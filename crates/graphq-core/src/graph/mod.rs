//! In-memory graph model and the queries run against it
//!
//! A graph is loaded once, its adjacency lists are sorted once (for the
//! programs that need deterministic traversal order), and then every query
//! in a batch reads it without modification.

pub mod adjacency;
pub mod algos;
pub mod degree;
pub mod traversal;
pub mod types;
pub mod vertex_set;


pub use adjacency::AdjacencyGraph;
pub use algos::{bfs, dag_shortest_paths, dfs, topological_sort, TopoSort};
pub use degree::{in_degree, out_degree};
pub use traversal::GraphProvider;
pub use types::{
    AdjacencyEntry, Distance, DistanceEntry, DistanceTable, EdgeSpec, GraphKind, VertexId, Weight,
    NO_WEIGHT,
};
pub use vertex_set::VertexSet;
