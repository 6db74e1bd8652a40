//! Graph algorithm implementations
//!
//! - `bfs`: breadth-first reachability from a source
//! - `dfs`: full-graph depth-first traversal
//! - `topo`: DFS-based topological sort with cycle detection
//! - `dag_shortest`: single-source shortest paths on a DAG
//!
//! All of them require a sorted adjacency so that output order is
//! reproducible, and none of them recurse.

pub mod bfs;
pub mod dag_shortest;
pub mod dfs;
pub mod topo;

pub use bfs::bfs;
pub use dag_shortest::dag_shortest_paths;
pub use dfs::dfs;
pub use topo::{topological_sort, TopoSort};

use super::types::VertexId;

/// One level of an explicit DFS stack: the vertex and the index of the next
/// outgoing entry to examine
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub vertex: VertexId,
    pub next: usize,
}

impl Frame {
    pub fn new(vertex: VertexId) -> Self {
        Self { vertex, next: 0 }
    }
}
