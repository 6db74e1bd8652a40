//! Query files
//!
//! One query per line. What a line means depends on the program reading it:
//! a bare vertex name for source queries, `o <v>` / `i <v>` for degree
//! queries, `d <v>` / `a <v>` for adjacency queries. Blank lines are
//! skipped; a bad line fails on its own without stopping the rest.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// How the lines of a query file are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// A bare vertex name: traversal or shortest-path source
    Source,
    /// `o <vertex>` or `i <vertex>`
    Degree,
    /// `d <vertex>` or `a <vertex>`
    Adjacency,
}

/// A single parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "vertex", rename_all = "snake_case")]
pub enum Query {
    Source(String),
    OutDegree(String),
    InDegree(String),
    Degree(String),
    Adjacency(String),
}

impl Query {
    /// The vertex this query is about
    pub fn vertex(&self) -> &str {
        match self {
            Query::Source(v)
            | Query::OutDegree(v)
            | Query::InDegree(v)
            | Query::Degree(v)
            | Query::Adjacency(v) => v,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Source(v) => write!(f, "{v}"),
            Query::OutDegree(v) => write!(f, "o {v}"),
            Query::InDegree(v) => write!(f, "i {v}"),
            Query::Degree(v) => write!(f, "d {v}"),
            Query::Adjacency(v) => write!(f, "a {v}"),
        }
    }
}

/// Parse one non-blank query line
pub fn parse_query_line(line_no: usize, line: &str, mode: QueryMode) -> Result<Query> {
    let line = line.trim();
    if mode == QueryMode::Source {
        if line.split_ascii_whitespace().count() != 1 {
            crate::bail_malformed!(line_no, "expected a single vertex name, found '{line}'");
        }
        return Ok(Query::Source(line.to_string()));
    }

    let mut tokens = line.split_ascii_whitespace();
    let (Some(op), Some(vertex), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        crate::bail_malformed!(line_no, "expected '<op> <vertex>', found '{line}'");
    };
    let vertex = vertex.to_string();

    match (mode, op) {
        (QueryMode::Degree, "o") => Ok(Query::OutDegree(vertex)),
        (QueryMode::Degree, "i") => Ok(Query::InDegree(vertex)),
        (QueryMode::Adjacency, "d") => Ok(Query::Degree(vertex)),
        (QueryMode::Adjacency, "a") => Ok(Query::Adjacency(vertex)),
        (QueryMode::Degree, _) => {
            crate::bail_malformed!(line_no, "unknown query '{op}' (expected 'o' or 'i')")
        }
        _ => crate::bail_malformed!(line_no, "unknown query '{op}' (expected 'd' or 'a')"),
    }
}

/// Parse every non-blank line of `text`, keeping file order.
///
/// Each entry is paired with its 1-based line number.
pub fn read_queries(text: &str, mode: QueryMode) -> Vec<(usize, Result<Query>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| (line_no, parse_query_line(line_no, line, mode)))
        .collect()
}

/// Read a query file from disk and parse it
pub fn read_query_file(path: &Path, mode: QueryMode) -> Result<Vec<(usize, Result<Query>)>> {
    let text = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read query file", path.display(), e))?;
    let queries = read_queries(&text, mode);
    tracing::debug!(path = %path.display(), count = queries.len(), "read queries");
    Ok(queries)
}
