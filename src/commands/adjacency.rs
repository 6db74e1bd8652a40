//! `graphq adjacency` - degree and adjacency-list queries on an undirected
//! graph
//!
//! The adjacency lists stay in file order; `a <v>` prints the stored list
//! and then a sorted copy of it. No graph dump is printed.

use crate::cli::{OutputFormat, QueryRunArgs};
use crate::commands::batch::run_queries;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::human;
use crate::commands::format::json::{self, QueryOutput};
use crate::commands::graph::load_graph;
use graphq_core::error::Result;
use graphq_core::graph::{out_degree, AdjacencyGraph, GraphKind, GraphProvider};
use graphq_core::query::{read_query_file, Query, QueryMode};

pub fn execute(ctx: &CommandContext, args: &QueryRunArgs) -> Result<()> {
    let queries = read_query_file(&args.queries, QueryMode::Adjacency)?;
    let graph = load_graph(ctx, &args.graph, GraphKind::UNDIRECTED, false)?;

    run_queries(ctx, queries, |query| match query {
        Query::Degree(vertex) => report_degree(ctx, &graph, vertex),
        Query::Adjacency(vertex) => report_lists(ctx, &graph, vertex),
        other => graphq_core::bail_usage!(format!("'{other}' is not an adjacency query")),
    })
}

fn report_degree(ctx: &CommandContext, graph: &AdjacencyGraph, vertex: &str) -> Result<()> {
    let degree = out_degree(graph, vertex)?;
    match ctx.format() {
        OutputFormat::Human => println!("{degree}"),
        OutputFormat::Json => json::print(&QueryOutput::Degree { vertex, degree })?,
    }
    Ok(())
}

fn report_lists(ctx: &CommandContext, graph: &AdjacencyGraph, vertex: &str) -> Result<()> {
    let id = graph.require_vertex(vertex)?;
    let sorted = graph.sorted_list(vertex)?;
    match ctx.format() {
        OutputFormat::Human => {
            println!("{}", human::adjacency_line(graph, graph.entries_with_head(id)));
            println!("{}", human::adjacency_line(graph, sorted));
        }
        OutputFormat::Json => json::print(&QueryOutput::Adjacency {
            vertex,
            stored: json::list_entries(graph, graph.entries_with_head(id)),
            sorted: json::list_entries(graph, sorted),
        })?,
    }
    Ok(())
}
