//! DFS-based topological sort with cycle detection
//!
//! Each vertex moves through `unvisited -> on-stack -> done`. Reaching a
//! vertex that is still on the stack means the graph has a cycle, and the
//! sort fails as a whole; no partial order is returned.

use super::Frame;
use crate::error::{GraphError, Result};
use crate::graph::traversal::{ensure_sorted, GraphProvider};
use crate::graph::types::VertexId;
use crate::graph::vertex_set::VertexSet;

/// Result of a successful topological sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort {
    finish_order: Vec<VertexId>,
}

impl TopoSort {
    /// Vertices sources-first: the finish order reversed
    pub fn topological_order(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.finish_order.iter().rev().copied()
    }

    /// Topological order as vertex names
    pub fn names(&self, graph: &dyn GraphProvider) -> Vec<String> {
        self.topological_order()
            .map(|id| graph.vertex_name(id).to_string())
            .collect()
    }
}

/// Sort the graph topologically, or fail with `CycleDetected`.
///
/// Roots are taken in file order and neighbors in adjacency order, so the
/// result is deterministic for a sorted graph.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topological_sort(graph: &dyn GraphProvider) -> Result<TopoSort> {
    ensure_sorted(graph)?;

    let vertex_count = graph.vertex_count();
    let mut done_or_active = VertexSet::with_capacity(vertex_count);
    let mut on_stack = VertexSet::with_capacity(vertex_count);
    let mut finish_order = Vec::with_capacity(vertex_count);
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.vertex_ids() {
        if !done_or_active.insert(root) {
            continue;
        }
        on_stack.insert(root);
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let Some(entry) = graph.outgoing(vertex).get(frame.next) else {
                on_stack.remove(vertex);
                finish_order.push(vertex);
                stack.pop();
                continue;
            };
            frame.next += 1;

            let target = entry.target;
            if on_stack.contains(target) {
                let name = graph.vertex_name(target);
                tracing::debug!(vertex = %name, depth = stack.len(), "cycle detected");
                return Err(GraphError::CycleDetected {
                    vertex: name.to_string(),
                });
            }
            if done_or_active.insert(target) {
                on_stack.insert(target);
                stack.push(Frame::new(target));
            }
        }
    }

    Ok(TopoSort { finish_order })
}
