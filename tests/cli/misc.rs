use crate::cli::support::graphq;
use predicates::prelude::*;

// ============================================================================
// Help, version, and no-subcommand tests
// ============================================================================

#[test]
fn test_help_flag() {
    graphq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphq"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("sssp"))
        .stdout(predicate::str::contains("adjacency"));
}

#[test]
fn test_version_flag() {
    graphq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphq"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    graphq()
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "graphq ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_format_is_usage_error() {
    graphq()
        .args(["--format", "yaml", "show", "g.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}
