//! `graphq show` - print a graph's adjacency lists
//!
//! Prints the dump even with `--quiet`, since it is the only output.

use crate::cli::ShowArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::DumpTitle;
use crate::commands::graph::{load_graph, render_graph, title_for};
use graphq_core::error::Result;
use graphq_core::graph::GraphKind;

pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.graph, GraphKind::DIRECTED_WEIGHTED, args.sorted)?;
    render_graph(ctx, &graph, title_for(&graph, DumpTitle::Undirected))
}
