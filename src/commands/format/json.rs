//! JSON rendering: one document per line on stdout

use serde::Serialize;

use graphq_core::error::Result;
use graphq_core::graph::{AdjacencyEntry, AdjacencyGraph, DistanceEntry, GraphProvider, Weight};

/// One adjacency-list entry; `weight` is null for unweighted entries
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    pub to: &'a str,
    pub weight: Option<Weight>,
}

#[derive(Debug, Serialize)]
pub struct VertexDocument<'a> {
    pub name: &'a str,
    pub edges: Vec<ListEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GraphBody<'a> {
    pub directed: bool,
    pub weighted: bool,
    pub size: usize,
    pub vertices: Vec<VertexDocument<'a>>,
}

/// The graph dump, `{"graph": {...}}`
#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    pub graph: GraphBody<'a>,
}

/// Result of a single query, tagged by `query`
#[derive(Debug, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryOutput<'a> {
    Bfs {
        source: &'a str,
        visited: Vec<String>,
    },
    Dfs {
        visited: Vec<String>,
    },
    Topo {
        order: Vec<String>,
    },
    OutDegree {
        vertex: &'a str,
        degree: usize,
    },
    InDegree {
        vertex: &'a str,
        degree: usize,
    },
    Degree {
        vertex: &'a str,
        degree: usize,
    },
    Adjacency {
        vertex: &'a str,
        stored: Vec<ListEntry<'a>>,
        sorted: Vec<ListEntry<'a>>,
    },
    Sssp {
        source: &'a str,
        distances: &'a [DistanceEntry],
    },
    CycleDetected {
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<&'a str>,
        vertex: String,
    },
}

/// Entries with their vertex names resolved, in the order given
pub fn list_entries(
    graph: &AdjacencyGraph,
    entries: impl IntoIterator<Item = AdjacencyEntry>,
) -> Vec<ListEntry<'_>> {
    entries
        .into_iter()
        .map(|entry| ListEntry {
            to: graph.vertex_name(entry.target),
            weight: entry.weight,
        })
        .collect()
}

/// Outgoing edges only; the head entry is implied by `name`
pub fn graph_document(graph: &AdjacencyGraph) -> GraphDocument<'_> {
    let kind = graph.kind();
    let vertices = graph
        .vertex_ids()
        .map(|id| VertexDocument {
            name: graph.vertex_name(id),
            edges: list_entries(graph, graph.outgoing(id).iter().copied()),
        })
        .collect();

    GraphDocument {
        graph: GraphBody {
            directed: kind.directed,
            weighted: kind.weighted,
            size: graph.vertex_count(),
            vertices,
        },
    }
}

/// Serialize `value` compactly onto its own line
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
