//! `graphq bfs` - breadth-first reachability from each queried source

use crate::cli::{OutputFormat, QueryRunArgs};
use crate::commands::batch::run_queries;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle};
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::{load_graph, print_graph, title_for};
use graphq_core::error::Result;
use graphq_core::graph::{bfs, GraphKind};
use graphq_core::query::{read_query_file, QueryMode};

pub fn execute(ctx: &CommandContext, args: &QueryRunArgs) -> Result<()> {
    let queries = read_query_file(&args.queries, QueryMode::Source)?;
    let graph = load_graph(ctx, &args.graph, GraphKind::UNDIRECTED, true)?;
    print_graph(ctx, &graph, title_for(&graph, DumpTitle::Unordered))?;

    run_queries(ctx, queries, |query| {
        let source = query.vertex();
        let visited = bfs(&graph, source)?;
        match ctx.format() {
            OutputFormat::Human => println!("{}", human::name_line(&visited)),
            OutputFormat::Json => json::print(&QueryOutput::Bfs { source, visited })?,
        }
        Ok(())
    })
}
