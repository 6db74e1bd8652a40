//! Loading and printing the graph a command runs against

use std::time::Instant;

use tracing::debug;

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle};
use crate::commands::format::json;
use graphq_core::error::Result;
use graphq_core::graph::{AdjacencyGraph, GraphKind, GraphProvider};
use graphq_core::load::load_graph_file;

/// Load the graph named by `args`, falling back to `default_kind`, and sort
/// its adjacency lists when `sort` is set
pub fn load_graph(
    ctx: &CommandContext,
    args: &GraphArgs,
    default_kind: GraphKind,
    sort: bool,
) -> Result<AdjacencyGraph> {
    let kind = args.kind_or(default_kind);
    let start = Instant::now();

    let mut graph = load_graph_file(&args.graph, kind, ctx.graph_config())?;
    if sort {
        graph.sort_adjacency();
    }

    graphq_core::trace_time!(start, "load_graph", vertices = graph.vertex_count());
    debug!(elapsed = ?ctx.start.elapsed(), kind = %kind, sorted = sort, "load_graph");
    Ok(graph)
}

/// Header for directed graphs, or `undirected` for undirected ones
pub fn title_for(graph: &AdjacencyGraph, undirected: DumpTitle) -> DumpTitle {
    if graph.kind().directed {
        DumpTitle::Ordered
    } else {
        undirected
    }
}

/// Print the graph dump unless `--quiet` was given
pub fn print_graph(ctx: &CommandContext, graph: &AdjacencyGraph, title: DumpTitle) -> Result<()> {
    if ctx.quiet() {
        return Ok(());
    }
    render_graph(ctx, graph, title)
}

pub fn render_graph(ctx: &CommandContext, graph: &AdjacencyGraph, title: DumpTitle) -> Result<()> {
    match ctx.format() {
        OutputFormat::Human => print!("{}", human::graph_dump(graph, title)),
        OutputFormat::Json => json::print(&json::graph_document(graph))?,
    }
    Ok(())
}
