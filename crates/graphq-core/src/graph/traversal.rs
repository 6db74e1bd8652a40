use super::types::{AdjacencyEntry, VertexId, Weight};
use crate::error::{GraphError, Result};

/// Trait for providing adjacency to the traversal algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn vertex_id(&self, name: &str) -> Option<VertexId>;
    fn vertex_name(&self, id: VertexId) -> &str;
    /// Outgoing entries of `id`, excluding its head entry
    fn outgoing(&self, id: VertexId) -> &[AdjacencyEntry];
    /// Whether every adjacency list has been sorted by neighbor name
    fn is_sorted(&self) -> bool;

    /// Vertices in file order
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_count()).map(VertexId))
    }

    /// Weight of the first stored `from -> to` edge, found by linear scan.
    ///
    /// `None` when there is no such edge or it carries no weight; callers
    /// must treat that as "no edge", never as zero.
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.outgoing(from)
            .iter()
            .find(|entry| entry.target == to)
            .and_then(|entry| entry.weight)
    }

    /// Resolve a vertex name or fail with `VertexNotFound`
    fn require_vertex(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name)
            .ok_or_else(|| GraphError::vertex_not_found(name))
    }

    fn names_of(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .map(|id| self.vertex_name(*id).to_string())
            .collect()
    }
}

/// Fail with `UnsortedAdjacency` unless the one-time sort has run
pub(crate) fn ensure_sorted(provider: &dyn GraphProvider) -> Result<()> {
    if provider.is_sorted() {
        Ok(())
    } else {
        Err(GraphError::UnsortedAdjacency)
    }
}
