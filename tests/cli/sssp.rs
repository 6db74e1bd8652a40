use crate::cli::support::{graphq, write_file, WEIGHTED_CYCLE, WEIGHTED_DAG};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// DAG shortest path command tests
// ============================================================================

#[test]
fn test_sssp_two_hop_path_wins() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", WEIGHTED_DAG);
    let queries = write_file(dir.path(), "queries.txt", "A\nB\n");

    graphq()
        .arg("sssp")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout(concat!(
            "Ordered graph size: 3\n",
            "A[-1] - B[2] - C[10] - NULL\n",
            "B[-1] - C[3] - NULL\n",
            "C[-1] - NULL\n",
            "A 0\nB 2\nC 5\n\n",
            "A INF\nB 0\nC 3\n\n",
        ));
}

#[test]
fn test_sssp_cycle_is_reported_per_query() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", WEIGHTED_CYCLE);
    let queries = write_file(dir.path(), "queries.txt", "A\nB\n");

    graphq()
        .args(["-q", "sssp"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout("Cycle detected\nCycle detected\n");
}

#[test]
fn test_sssp_unknown_source_does_not_stop_batch() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", WEIGHTED_DAG);
    let queries = write_file(dir.path(), "queries.txt", "Z\nB\n");

    graphq()
        .args(["-q", "sssp"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stdout("A INF\nB 0\nC 3\n\n");
}

#[test]
fn test_sssp_unknown_source_checked_before_cycle() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", WEIGHTED_CYCLE);
    let queries = write_file(dir.path(), "queries.txt", "Z\n");

    graphq()
        .arg("sssp")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Cycle detected").not())
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_sssp_overflowing_path_stays_unreached() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "graph.txt",
        "3\nA\nB\nC\nA B 9223372036854775807\nB C 1\n",
    );
    let queries = write_file(dir.path(), "queries.txt", "A\n");

    graphq()
        .args(["-q", "sssp"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout("A 0\nB 9223372036854775807\nC INF\n\n");
}
