use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::traversal::{ensure_sorted, GraphProvider};
use crate::graph::vertex_set::VertexSet;

/// Breadth-first traversal from `source`.
///
/// Returns every vertex reachable from `source` exactly once, in the order
/// it was first dequeued. Neighbors are enqueued in adjacency order and only
/// while unvisited; a vertex can sit in the queue more than once, and the
/// later copies are dropped when dequeued.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &dyn GraphProvider, source: &str) -> Result<Vec<String>> {
    ensure_sorted(graph)?;
    let source_id = graph.require_vertex(source)?;

    let mut visited = VertexSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    let mut frontier = VecDeque::from([source_id]);

    while let Some(vertex) = frontier.pop_front() {
        if !visited.insert(vertex) {
            continue;
        }
        order.push(vertex);

        for entry in graph.outgoing(vertex) {
            if !visited.contains(entry.target) {
                frontier.push_back(entry.target);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(graph.names_of(&order))
}
