//! CLI argument parsing for graphq
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --fail-fast

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, QueryRunArgs, ShowArgs};
pub use output::OutputFormat;
use output::parse_format;

/// graphq - load a graph from a text file and answer queries against it
#[derive(Parser, Debug)]
#[command(name = "graphq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output (graph dumps, error text)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config file (default: ~/.config/graphq/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Stop at the first failing query
    #[arg(long, global = true)]
    pub fail_fast: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first reachability from each source vertex in the query file
    Bfs(QueryRunArgs),

    /// Depth-first traversal of the whole graph
    Dfs(GraphArgs),

    /// Out-degree (`o <v>`) and in-degree (`i <v>`) queries
    Degree(QueryRunArgs),

    /// Degree (`d <v>`) and adjacency-list (`a <v>`) queries
    Adjacency(QueryRunArgs),

    /// Single-source shortest paths on a DAG, one source per query line
    Sssp(QueryRunArgs),

    /// Topological order of the graph, or report a cycle
    Topo(GraphArgs),

    /// Print the adjacency lists of a graph
    Show(ShowArgs),
}
