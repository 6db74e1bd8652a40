//! Plain-text rendering
//!
//! Functions here build strings; the commands decide where they go.

use graphq_core::graph::{AdjacencyEntry, AdjacencyGraph, DistanceTable, GraphProvider};

/// Printed instead of a result when the graph is not acyclic
pub const CYCLE_DETECTED: &str = "Cycle detected";

/// First word of the graph dump header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpTitle {
    Ordered,
    Unordered,
    Undirected,
}

impl DumpTitle {
    fn label(self) -> &'static str {
        match self {
            DumpTitle::Ordered => "Ordered",
            DumpTitle::Unordered => "Unordered",
            DumpTitle::Undirected => "Undirected",
        }
    }
}

/// Header line plus one line per vertex, head entry first
pub fn graph_dump(graph: &AdjacencyGraph, title: DumpTitle) -> String {
    let mut out = format!("{} graph size: {}\n", title.label(), graph.vertex_count());
    for id in graph.vertex_ids() {
        out.push_str(&adjacency_line(graph, graph.entries_with_head(id)));
        out.push('\n');
    }
    out
}

/// `A[-1] - B[2] - NULL` for weighted graphs, `A - B - NULL` otherwise
pub fn adjacency_line(
    graph: &AdjacencyGraph,
    entries: impl IntoIterator<Item = AdjacencyEntry>,
) -> String {
    let weighted = graph.kind().weighted;
    let mut line = String::new();
    for entry in entries {
        let name = graph.vertex_name(entry.target);
        if weighted {
            line.push_str(&format!("{}[{}] - ", name, entry.display_weight()));
        } else {
            line.push_str(&format!("{} - ", name));
        }
    }
    line.push_str("NULL");
    line
}

/// Every name followed by a single space
pub fn name_line(names: &[String]) -> String {
    names.iter().map(|name| format!("{name} ")).collect()
}

pub fn out_degree_line(vertex: &str, degree: usize) -> String {
    format!("Out degree of vertex {vertex}: {degree}")
}

pub fn in_degree_line(vertex: &str, degree: usize) -> String {
    format!("In degree of vertex {vertex}: {degree}")
}

/// `name distance` rows in table order, then an empty line
pub fn distance_table(table: &DistanceTable) -> String {
    let mut out = String::new();
    for entry in &table.entries {
        out.push_str(&format!("{} {}\n", entry.vertex, entry.distance));
    }
    out.push('\n');
    out
}
