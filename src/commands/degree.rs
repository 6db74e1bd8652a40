//! `graphq degree` - out-degree and in-degree queries

use crate::cli::{OutputFormat, QueryRunArgs};
use crate::commands::batch::run_queries;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human::{self, DumpTitle};
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::{load_graph, print_graph, title_for};
use graphq_core::error::Result;
use graphq_core::graph::{in_degree, out_degree, GraphKind};
use graphq_core::query::{read_query_file, Query, QueryMode};

pub fn execute(ctx: &CommandContext, args: &QueryRunArgs) -> Result<()> {
    let queries = read_query_file(&args.queries, QueryMode::Degree)?;
    let graph = load_graph(ctx, &args.graph, GraphKind::DIRECTED_WEIGHTED, false)?;
    print_graph(ctx, &graph, title_for(&graph, DumpTitle::Undirected))?;

    run_queries(ctx, queries, |query| {
        let vertex = query.vertex();
        let (line, output) = match query {
            Query::OutDegree(_) => {
                let degree = out_degree(&graph, vertex)?;
                (
                    human::out_degree_line(vertex, degree),
                    QueryOutput::OutDegree { vertex, degree },
                )
            }
            Query::InDegree(_) => {
                let degree = in_degree(&graph, vertex)?;
                (
                    human::in_degree_line(vertex, degree),
                    QueryOutput::InDegree { vertex, degree },
                )
            }
            other => graphq_core::bail_usage!(format!("'{other}' is not a degree query")),
        };
        match ctx.format() {
            OutputFormat::Human => println!("{line}"),
            OutputFormat::Json => json::print(&output)?,
        }
        Ok(())
    })
}
