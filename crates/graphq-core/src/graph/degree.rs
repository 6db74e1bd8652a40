//! Degree queries
//!
//! In-degree counts every stored list entry naming the vertex, the vertex's
//! own head entry included, then subtracts one for that head. A self-loop
//! therefore adds one to both degrees of its vertex.

use super::adjacency::AdjacencyGraph;
use super::traversal::GraphProvider;
use crate::error::Result;

/// Number of stored outgoing entries of `name`
pub fn out_degree(graph: &AdjacencyGraph, name: &str) -> Result<usize> {
    Ok(graph.neighbors(name)?.len())
}

/// Number of stored entries across all lists that point at `name`
pub fn in_degree(graph: &AdjacencyGraph, name: &str) -> Result<usize> {
    let id = graph.require_vertex(name)?;
    let occurrences = graph
        .vertex_ids()
        .flat_map(|owner| graph.entries_with_head(owner))
        .filter(|entry| entry.target == id)
        .count();
    Ok(occurrences - 1)
}
