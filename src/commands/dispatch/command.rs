//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphq_core::config::{Config, GraphConfig};
use graphq_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// `--fail-fast` on the command line, or `query.fail_fast` in config
    pub fn fail_fast(&self) -> bool {
        self.cli.fail_fast || self.config.query.fail_fast
    }

    pub fn graph_config(&self) -> &GraphConfig {
        &self.config.graph
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphq {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph traversal and shortest-path queries over small text graphs.");
        println!();
        println!("Run `graphq --help` for usage information.");
        Ok(())
    }
}
