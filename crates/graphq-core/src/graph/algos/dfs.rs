use super::Frame;
use crate::error::Result;
use crate::graph::traversal::{ensure_sorted, GraphProvider};
use crate::graph::vertex_set::VertexSet;

/// Depth-first traversal of the whole graph, in pre-order.
///
/// A fresh traversal starts from every vertex (in file order) not yet
/// visited, so every vertex appears exactly once regardless of connectivity.
/// Runs on an explicit stack; the order matches the recursive formulation.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &dyn GraphProvider) -> Result<Vec<String>> {
    ensure_sorted(graph)?;

    let vertex_count = graph.vertex_count();
    let mut visited = VertexSet::with_capacity(vertex_count);
    let mut order = Vec::with_capacity(vertex_count);
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.vertex_ids() {
        if !visited.insert(root) {
            continue;
        }
        order.push(root);
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = graph.outgoing(frame.vertex).get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if visited.insert(entry.target) {
                order.push(entry.target);
                stack.push(Frame::new(entry.target));
            }
        }
    }

    Ok(graph.names_of(&order))
}
