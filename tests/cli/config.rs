use crate::cli::support::{graphq, write_file, UNDIRECTED_ABCD};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_dir_enables_fail_fast() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "config.toml", "[query]\nfail_fast = true\n");
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "Z\nA\n");

    graphq()
        .env("GRAPHQ_CONFIG_DIR", dir.path())
        .args(["-q", "bfs"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stdout("");
}

#[test]
fn test_explicit_config_skips_dangling_edges() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "graphq.toml", "[graph]\ndangling_edges = \"skip\"\n");
    let graph = write_file(dir.path(), "graph.txt", "2\nA\nB\nA Q 1\nA B 4\n");

    graphq()
        .arg("--config")
        .arg(&config)
        .args(["show"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Ordered graph size: 2\nA[-1] - B[4] - NULL\nB[-1] - NULL\n")
        .stderr(predicate::str::contains("skipping dangling edge"));
}

#[test]
fn test_vertex_limit_from_config() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "graphq.toml", "[graph]\nmax_vertices = 2\n");
    let graph = write_file(dir.path(), "graph.txt", "3\nA\nB\nC\n");

    graphq()
        .arg("--config")
        .arg(&config)
        .args(["show"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph declares 3 vertices (limit: 2)"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "1\nA\n");

    graphq()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_value() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "graphq.toml", "[graph]\nmax_vertices = 0\n");
    let graph = write_file(dir.path(), "graph.txt", "1\nA\n");

    graphq()
        .arg("--config")
        .arg(&config)
        .arg("show")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid graph.max_vertices: 0"));
}
