//! `graphq dfs` - depth-first traversal of the whole graph

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle};
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::{load_graph, print_graph, title_for};
use graphq_core::error::Result;
use graphq_core::graph::{dfs, GraphKind};

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(ctx, args, GraphKind::DIRECTED_WEIGHTED, true)?;
    print_graph(ctx, &graph, title_for(&graph, DumpTitle::Undirected))?;

    let visited = dfs(&graph)?;
    match ctx.format() {
        OutputFormat::Human => println!("{}", human::name_line(&visited)),
        OutputFormat::Json => json::print(&QueryOutput::Dfs { visited })?,
    }
    Ok(())
}
