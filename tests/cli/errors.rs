use crate::cli::support::{graphq, write_file, UNDIRECTED_ABCD};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error reporting and exit code tests
// ============================================================================

#[test]
fn test_unknown_vertex_fails_one_query() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "A\nZ\nD\n");

    graphq()
        .arg("bfs")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stdout(predicate::str::ends_with("A B C D \nD B A C \n"))
        .stderr(predicate::str::contains("error: vertex not found: Z"))
        .stderr(predicate::str::contains("error: 1 of 3 queries failed"));
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "Z\nA\n");

    graphq()
        .args(["-q", "--fail-fast", "bfs"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stdout("");
}

#[test]
fn test_fail_fast_error_reported_once() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "Z\n");

    graphq()
        .args(["bfs", "--fail-fast"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stderr("error: vertex not found: Z\n");
}

#[test]
fn test_malformed_vertex_count() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "x\nA\n");

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("malformed input at line 1"));
}

#[test]
fn test_huge_vertex_count_is_malformed() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "18446744073709551615\nA\n");

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("malformed input at line 3"));
}

#[test]
fn test_malformed_edge_line_reports_line_number() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "2\nA\nB\nA B\n");

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed input at line 4"));
}

#[test]
fn test_dangling_edge_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "2\nA\nB\nA Q 1\n");

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("references unknown vertex Q"));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "2\nA\nA\n");

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate vertex: A"));
}

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();

    graphq()
        .arg("dfs")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_missing_query_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);

    graphq()
        .arg("bfs")
        .arg(&graph)
        .arg(dir.path().join("nope.txt"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("failed to read query file"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    graphq().arg("bfs").assert().code(2);
}

#[test]
fn test_quiet_hides_error_text() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "Z\n");

    graphq()
        .args(["-q", "bfs"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stderr("");
}
