pub use graphq_core::format::OutputFormat;

use graphq_core::error::GraphError;

/// Value parser for `--format`
pub fn parse_format(s: &str) -> Result<OutputFormat, GraphError> {
    s.parse()
}
