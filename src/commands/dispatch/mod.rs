//! Command dispatch logic for graphq

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{adjacency, bfs, degree, dfs, show, sssp, topo};
use graphq_core::config::Config;
use graphq_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => bfs::execute(ctx, args),
            Commands::Dfs(args) => dfs::execute(ctx, args),
            Commands::Degree(args) => degree::execute(ctx, args),
            Commands::Adjacency(args) => adjacency::execute(ctx, args),
            Commands::Sssp(args) => sssp::execute(ctx, args),
            Commands::Topo(args) => topo::execute(ctx, args),
            Commands::Show(args) => show::execute(ctx, args),
        }
    }
}
