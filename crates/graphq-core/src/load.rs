//! Graph description files
//!
//! ```text
//! 3
//! A
//! B
//! C
//! A B 2
//! B C 3
//! ```
//!
//! The first non-empty line is the vertex count, followed by exactly that
//! many vertex-name lines, followed by edge lines. Unweighted graphs use
//! `<u> <v>`, weighted graphs `<u> <v> <weight>`. Blank edge lines are
//! ignored. Every parse failure reports its 1-based line number.

use std::fs;
use std::path::Path;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyGraph, EdgeSpec, GraphKind, Weight};

/// A parsed graph file, before any validation against the graph model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

/// Parse the text of a graph file for a graph of the given kind
pub fn parse_graph(text: &str, kind: GraphKind) -> Result<GraphDescription> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (count_line, count_text) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or_else(|| GraphError::malformed(1, "missing vertex count"))?;
    let count: usize = match count_text.trim().parse() {
        Ok(count) => count,
        Err(_) => crate::bail_malformed!(
            count_line,
            "expected vertex count, found '{}'",
            count_text.trim()
        ),
    };

    // The declared count is untrusted; the name lines bound the growth.
    let mut vertices = Vec::new();
    let mut last_line = count_line;
    for _ in 0..count {
        let Some((line_no, line)) = lines.next() else {
            crate::bail_malformed!(
                last_line + 1,
                "expected {count} vertex names, found {}",
                vertices.len()
            );
        };
        let name = line.trim();
        if name.is_empty() {
            crate::bail_malformed!(line_no, "empty vertex name");
        }
        vertices.push(name.to_string());
        last_line = line_no;
    }

    let mut edges = Vec::new();
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        edges.push(parse_edge(line_no, line, kind)?);
    }

    Ok(GraphDescription { vertices, edges })
}

fn parse_edge(line_no: usize, line: &str, kind: GraphKind) -> Result<EdgeSpec> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
    match (kind.weighted, tokens.as_slice()) {
        (false, [from, to]) => Ok(EdgeSpec::unweighted(*from, *to)),
        (true, [from, to, weight]) => {
            let weight: Weight = match weight.parse() {
                Ok(weight) => weight,
                Err(_) => crate::bail_malformed!(line_no, "invalid edge weight '{weight}'"),
            };
            if weight < 0 {
                crate::bail_malformed!(line_no, "negative edge weight {weight}");
            }
            Ok(EdgeSpec::weighted(*from, *to, weight))
        }
        (false, _) => {
            crate::bail_malformed!(line_no, "expected '<u> <v>', found '{}'", line.trim())
        }
        (true, _) => crate::bail_malformed!(
            line_no,
            "expected '<u> <v> <weight>', found '{}'",
            line.trim()
        ),
    }
}

/// Read and build a graph from a file. The adjacency is left unsorted.
#[tracing::instrument(skip(config), fields(path = %path.display(), kind = %kind))]
pub fn load_graph_file(
    path: &Path,
    kind: GraphKind,
    config: &GraphConfig,
) -> Result<AdjacencyGraph> {
    let text = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read graph file", path.display(), e))?;
    let description = parse_graph(&text, kind)?;
    if description.vertices.len() > config.max_vertices {
        return Err(GraphError::TooManyVertices {
            count: description.vertices.len(),
            limit: config.max_vertices,
        });
    }
    AdjacencyGraph::build(kind, description.vertices, description.edges, config)
}
