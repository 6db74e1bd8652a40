//! `graphq sssp` - single-source shortest paths on a DAG
//!
//! Each query line names a source. A cyclic graph is reported as
//! `Cycle detected` for that query, which still counts as answered.

use crate::cli::{OutputFormat, QueryRunArgs};
use crate::commands::batch::run_queries;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle, CYCLE_DETECTED};
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::{load_graph, print_graph, title_for};
use graphq_core::error::{GraphError, Result};
use graphq_core::graph::{dag_shortest_paths, GraphKind};
use graphq_core::query::{read_query_file, QueryMode};

pub fn execute(ctx: &CommandContext, args: &QueryRunArgs) -> Result<()> {
    let queries = read_query_file(&args.queries, QueryMode::Source)?;
    let graph = load_graph(ctx, &args.graph, GraphKind::DIRECTED_WEIGHTED, true)?;
    print_graph(ctx, &graph, title_for(&graph, DumpTitle::Undirected))?;

    run_queries(ctx, queries, |query| {
        let source = query.vertex();
        match dag_shortest_paths(&graph, source) {
            Ok(table) => match ctx.format() {
                OutputFormat::Human => print!("{}", human::distance_table(&table)),
                OutputFormat::Json => json::print(&QueryOutput::Sssp {
                    source,
                    distances: &table.entries,
                })?,
            },
            Err(GraphError::CycleDetected { vertex }) => match ctx.format() {
                OutputFormat::Human => println!("{CYCLE_DETECTED}"),
                OutputFormat::Json => json::print(&QueryOutput::CycleDetected {
                    source: Some(source),
                    vertex,
                })?,
            },
            Err(err) => return Err(err),
        }
        Ok(())
    })
}
