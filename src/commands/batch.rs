//! Running a query file against a loaded graph
//!
//! Queries run in file order. A failing query is reported on stderr and the
//! batch moves on, unless fail-fast is set, in which case its error is
//! returned as is. Any failure makes the whole run fail with
//! `QueryBatchFailed`.

use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphq_core::error::{GraphError, Result};
use graphq_core::query::Query;

pub fn run_queries<F>(
    ctx: &CommandContext,
    queries: Vec<(usize, Result<Query>)>,
    mut answer: F,
) -> Result<()>
where
    F: FnMut(&Query) -> Result<()>,
{
    let total = queries.len();
    let mut failed = 0usize;

    for (line, query) in queries {
        let outcome = query.and_then(|query| {
            debug!(line, query = %query, "run_query");
            answer(&query)
        });

        if let Err(err) = outcome {
            if ctx.fail_fast() {
                return Err(err);
            }
            failed += 1;
            report_query_error(ctx, line, &err);
        }
    }

    debug!(elapsed = ?ctx.start.elapsed(), total, failed, "run_queries");

    if failed > 0 {
        return Err(GraphError::QueryBatchFailed { failed, total });
    }
    Ok(())
}

fn report_query_error(ctx: &CommandContext, line: usize, err: &GraphError) {
    debug!(line, error_type = err.error_type(), "query failed");
    match ctx.format() {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !ctx.quiet() => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
}
