//! Argument structs shared by the graph subcommands

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use graphq_core::graph::GraphKind;

/// Graph kind as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Directed,
    DirectedWeighted,
    Undirected,
    UndirectedWeighted,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directed => GraphKind::DIRECTED,
            KindArg::DirectedWeighted => GraphKind::DIRECTED_WEIGHTED,
            KindArg::Undirected => GraphKind::UNDIRECTED,
            KindArg::UndirectedWeighted => GraphKind::UNDIRECTED_WEIGHTED,
        }
    }
}

/// A graph file plus an optional kind override
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph description file
    pub graph: PathBuf,

    /// Graph kind, overriding the subcommand's default
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl GraphArgs {
    pub fn kind_or(&self, default: GraphKind) -> GraphKind {
        self.kind.map(GraphKind::from).unwrap_or(default)
    }
}

/// A graph file and a query file
#[derive(Args, Debug, Clone)]
pub struct QueryRunArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Query file, one query per line
    pub queries: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Sort every adjacency list by neighbor name before printing
    #[arg(long)]
    pub sorted: bool,
}
