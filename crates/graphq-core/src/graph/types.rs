use std::fmt;

use serde::Serialize;

/// Edge weight as read from a graph file
pub type Weight = i64;

/// Weight printed for entries that carry no weight (head entries and
/// unweighted edges)
pub const NO_WEIGHT: Weight = -1;

/// Position of a vertex in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether edges are directed and whether they carry weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GraphKind {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphKind {
    pub const DIRECTED_WEIGHTED: GraphKind = GraphKind {
        directed: true,
        weighted: true,
    };
    pub const DIRECTED: GraphKind = GraphKind {
        directed: true,
        weighted: false,
    };
    pub const UNDIRECTED: GraphKind = GraphKind {
        directed: false,
        weighted: false,
    };
    pub const UNDIRECTED_WEIGHTED: GraphKind = GraphKind {
        directed: false,
        weighted: true,
    };
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.directed { "directed" } else { "undirected" };
        if self.weighted {
            write!(f, "{direction}-weighted")
        } else {
            write!(f, "{direction}")
        }
    }
}

/// One stored entry of an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub target: VertexId,
    pub weight: Option<Weight>,
}

impl AdjacencyEntry {
    /// Weight as rendered, with the `-1` sentinel for missing weights
    pub fn display_weight(&self) -> Weight {
        self.weight.unwrap_or(NO_WEIGHT)
    }
}

/// An edge as handed to [`AdjacencyGraph::build`](super::AdjacencyGraph::build)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<Weight>,
}

impl EdgeSpec {
    pub fn unweighted(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: Some(weight),
        }
    }
}

/// Tentative or final shortest-path distance.
///
/// `Unreached` compares as +infinity and never takes part in arithmetic.
/// Serializes as a number, or `null` when unreached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(i64),
    Unreached,
}

impl Distance {
    /// True when `candidate` is strictly shorter than the current distance
    pub fn improves_on(&self, candidate: i64) -> bool {
        match self {
            Distance::Finite(current) => *current > candidate,
            Distance::Unreached => true,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreached => write!(f, "INF"),
        }
    }
}

/// One row of a distance table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEntry {
    pub vertex: String,
    pub distance: Distance,
}

/// Single-source shortest-path result, rows in topological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    pub source: String,
    pub entries: Vec<DistanceEntry>,
}
