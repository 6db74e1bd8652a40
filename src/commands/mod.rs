pub mod adjacency;
pub mod batch;
pub mod bfs;
pub mod degree;
pub mod dfs;
pub mod dispatch;
pub mod format;
pub mod graph;
pub mod show;
pub mod sssp;
pub mod topo;
