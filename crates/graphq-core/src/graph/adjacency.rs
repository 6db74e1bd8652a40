//! Adjacency-list graph keyed by vertex name
//!
//! Each vertex owns one list whose first (head) entry is the vertex itself
//! with no weight, followed by its outgoing edges in insertion order until
//! [`AdjacencyGraph::sort_adjacency`] reorders them by neighbor name. The
//! head entry is never stored; it is synthesized by
//! [`AdjacencyGraph::entries_with_head`] for rendering and in-degree counts.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::traversal::GraphProvider;
use super::types::{AdjacencyEntry, EdgeSpec, GraphKind, VertexId};
use crate::config::{DanglingEdgePolicy, GraphConfig};
use crate::error::{GraphError, Result};

#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    kind: GraphKind,
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    edges: Vec<Vec<AdjacencyEntry>>,
    sorted: bool,
}

impl AdjacencyGraph {
    /// Build a graph from its vertex names (in file order) and edges.
    ///
    /// Every vertex gets an entry even if it has no outgoing edges.
    /// Undirected edges are stored as two half-edges, except self-loops
    /// which are stored once.
    #[tracing::instrument(skip_all, fields(kind = %kind))]
    pub fn build<I, S>(
        kind: GraphKind,
        vertex_names: I,
        edges: impl IntoIterator<Item = EdgeSpec>,
        config: &GraphConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = AdjacencyGraph {
            kind,
            names: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            sorted: false,
        };

        for name in vertex_names {
            graph.add_vertex(name.into(), config.max_vertices)?;
        }

        let mut skipped = 0usize;
        for edge in edges {
            if !graph.add_edge(&edge, config.dangling_edges)? {
                skipped += 1;
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            skipped,
            "built adjacency graph"
        );
        Ok(graph)
    }

    fn add_vertex(&mut self, name: String, max_vertices: usize) -> Result<()> {
        if name.is_empty() {
            crate::bail_invalid!("vertex name", "(empty)");
        }
        if self.names.len() >= max_vertices {
            return Err(GraphError::TooManyVertices {
                count: self.names.len() + 1,
                limit: max_vertices,
            });
        }
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateVertex { name });
        }

        let id = VertexId(self.names.len());
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.edges.push(Vec::new());
        Ok(())
    }

    /// Returns `Ok(false)` when the edge was skipped as dangling
    fn add_edge(&mut self, edge: &EdgeSpec, policy: DanglingEdgePolicy) -> Result<bool> {
        let from = self.index.get(&edge.from).copied();
        let to = self.index.get(&edge.to).copied();
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (from, _) => {
                let missing = if from.is_none() { &edge.from } else { &edge.to };
                return match policy {
                    DanglingEdgePolicy::Reject => Err(GraphError::DanglingEdge {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: missing.clone(),
                    }),
                    DanglingEdgePolicy::Skip => {
                        warn!(
                            from = %edge.from,
                            to = %edge.to,
                            missing = %missing,
                            "skipping dangling edge"
                        );
                        Ok(false)
                    }
                };
            }
        };

        let weight = if self.kind.weighted {
            match edge.weight {
                Some(w) if w >= 0 => Some(w),
                Some(w) => {
                    let value = format!("{} -> {}: {w}", edge.from, edge.to);
                    crate::bail_invalid!("edge weight", value)
                }
                None => {
                    let value = format!("{} -> {}: missing", edge.from, edge.to);
                    crate::bail_invalid!("edge weight", value)
                }
            }
        } else {
            None
        };

        self.edges[from.index()].push(AdjacencyEntry { target: to, weight });
        if !self.kind.directed && from != to {
            self.edges[to.index()].push(AdjacencyEntry {
                target: from,
                weight,
            });
        }
        Ok(true)
    }

    /// Reorder every adjacency list by neighbor name, ascending, byte-wise.
    ///
    /// The sort is stable, so parallel edges keep their insertion order.
    /// Running it again changes nothing.
    pub fn sort_adjacency(&mut self) {
        let names = &self.names;
        for list in &mut self.edges {
            list.sort_by(|a, b| names[a.target.index()].cmp(&names[b.target.index()]));
        }
        self.sorted = true;
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Total number of stored half-edges
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Outgoing entries of the named vertex, head entry excluded
    pub fn neighbors(&self, name: &str) -> Result<&[AdjacencyEntry]> {
        let id = self.require_vertex(name)?;
        Ok(self.outgoing(id))
    }

    /// The named vertex's full stored list, head included, as a sorted copy.
    ///
    /// The head takes part in the sort like any other entry. The graph
    /// itself is left untouched.
    pub fn sorted_list(&self, name: &str) -> Result<Vec<AdjacencyEntry>> {
        let id = self.require_vertex(name)?;
        let mut entries: Vec<_> = self.entries_with_head(id).collect();
        entries.sort_by(|a, b| self.vertex_name(a.target).cmp(self.vertex_name(b.target)));
        Ok(entries)
    }

    /// The head entry of `id`: the vertex itself, unweighted
    pub fn head(&self, id: VertexId) -> AdjacencyEntry {
        AdjacencyEntry {
            target: id,
            weight: None,
        }
    }

    /// The full stored list of `id`, head entry first
    pub fn entries_with_head(&self, id: VertexId) -> impl Iterator<Item = AdjacencyEntry> + '_ {
        std::iter::once(self.head(id)).chain(self.outgoing(id).iter().copied())
    }
}

impl GraphProvider for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    fn vertex_name(&self, id: VertexId) -> &str {
        &self.names[id.index()]
    }

    fn outgoing(&self, id: VertexId) -> &[AdjacencyEntry] {
        &self.edges[id.index()]
    }

    fn is_sorted(&self) -> bool {
        self.sorted
    }
}
