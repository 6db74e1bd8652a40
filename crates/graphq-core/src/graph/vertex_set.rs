//! Set of vertices backed by a membership bitmap
//!
//! Used as the visited set of every traversal and as the "on the current
//! DFS path" set of the topological sort, where it is pushed on entry and
//! popped on exit exactly following the traversal stack.

use super::types::VertexId;

#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    members: Vec<bool>,
}

impl VertexSet {
    /// An empty set sized for a graph of `vertex_count` vertices
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            members: vec![false; vertex_count],
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.get(vertex.index()).copied().unwrap_or(false)
    }

    /// Returns `true` if the vertex was not yet a member
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        let index = vertex.index();
        if index >= self.members.len() {
            self.members.resize(index + 1, false);
        }
        if self.members[index] {
            return false;
        }
        self.members[index] = true;
        true
    }

    /// Returns `true` if the vertex was a member
    pub fn remove(&mut self, vertex: VertexId) -> bool {
        match self.members.get_mut(vertex.index()) {
            Some(slot) if *slot => {
                *slot = false;
                true
            }
            _ => false,
        }
    }

}
