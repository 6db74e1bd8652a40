use crate::cli::support::{graphq, write_file, UNDIRECTED_ABCD};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// BFS command tests
// ============================================================================

#[test]
fn test_bfs_prints_graph_then_visits() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "A\nD\n");

    graphq()
        .arg("bfs")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout(concat!(
            "Unordered graph size: 4\n",
            "A - B - C - NULL\n",
            "B - A - D - NULL\n",
            "C - A - NULL\n",
            "D - B - NULL\n",
            "A B C D \n",
            "D B A C \n",
        ));
}

#[test]
fn test_bfs_quiet_skips_graph_dump() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "C\n");

    graphq()
        .arg("--quiet")
        .arg("bfs")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout("C A B D \n");
}

#[test]
fn test_bfs_directed_kind_override() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "A\nD\n");

    graphq()
        .args(["bfs", "--kind", "directed"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ordered graph size: 4\n"))
        .stdout(predicate::str::ends_with("A B C D \nD \n"));
}

#[test]
fn test_bfs_skips_blank_query_lines() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNDIRECTED_ABCD);
    let queries = write_file(dir.path(), "queries.txt", "\nB\n\n");

    graphq()
        .args(["-q", "bfs"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout("B A D C \n");
}
