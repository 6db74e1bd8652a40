use super::topo::topological_sort;
use crate::error::Result;
use crate::graph::traversal::{ensure_sorted, GraphProvider};
use crate::graph::types::{Distance, DistanceEntry, DistanceTable};

/// Single-source shortest paths on a DAG.
///
/// Vertices are processed in topological order, so each distance is final
/// before it is used to relax successors: one pass, no revisits. Edge
/// weights are looked up with [`GraphProvider::edge_weight`]; an edge with
/// no weight contributes nothing. Vertices the source cannot reach keep
/// [`Distance::Unreached`]. A path whose length overflows `i64` is never
/// an improvement.
///
/// Fails with `VertexNotFound` for an unknown source and with
/// `CycleDetected` when the graph is not acyclic.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dag_shortest_paths(graph: &dyn GraphProvider, source: &str) -> Result<DistanceTable> {
    ensure_sorted(graph)?;
    let source_id = graph.require_vertex(source)?;

    let sort = topological_sort(graph)?;

    let mut distances = vec![Distance::Unreached; graph.vertex_count()];
    distances[source_id.index()] = Distance::Finite(0);

    let mut relaxations = 0usize;
    for u in sort.topological_order() {
        let Distance::Finite(du) = distances[u.index()] else {
            continue;
        };
        for entry in graph.outgoing(u) {
            let Some(weight) = graph.edge_weight(u, entry.target) else {
                continue;
            };
            let Some(candidate) = du.checked_add(weight) else {
                continue;
            };
            let slot = &mut distances[entry.target.index()];
            if slot.improves_on(candidate) {
                *slot = Distance::Finite(candidate);
                relaxations += 1;
            }
        }
    }

    tracing::debug!(relaxations, "dag shortest paths complete");

    let entries = sort
        .topological_order()
        .map(|id| DistanceEntry {
            vertex: graph.vertex_name(id).to_string(),
            distance: distances[id.index()],
        })
        .collect();

    Ok(DistanceTable {
        source: source.to_string(),
        entries,
    })
}
