//! `graphq topo` - topological order of the whole graph

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle, CYCLE_DETECTED};
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::{load_graph, print_graph, title_for};
use graphq_core::error::{GraphError, Result};
use graphq_core::graph::{topological_sort, GraphKind};

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let graph = load_graph(ctx, args, GraphKind::DIRECTED_WEIGHTED, true)?;
    print_graph(ctx, &graph, title_for(&graph, DumpTitle::Undirected))?;

    match topological_sort(&graph) {
        Ok(sort) => {
            let order = sort.names(&graph);
            match ctx.format() {
                OutputFormat::Human => println!("{}", human::name_line(&order)),
                OutputFormat::Json => json::print(&QueryOutput::Topo { order })?,
            }
        }
        Err(GraphError::CycleDetected { vertex }) => match ctx.format() {
            OutputFormat::Human => println!("{CYCLE_DETECTED}"),
            OutputFormat::Json => json::print(&QueryOutput::CycleDetected {
                source: None,
                vertex,
            })?,
        },
        Err(err) => return Err(err),
    }
    Ok(())
}
