use crate::cli::support::{graphq, write_file, WEIGHTED_DAG};
use tempfile::tempdir;

// ============================================================================
// Degree command tests
// ============================================================================

#[test]
fn test_degree_queries() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", WEIGHTED_DAG);
    let queries = write_file(dir.path(), "queries.txt", "o A\ni C\ni A\no C\n");

    graphq()
        .arg("degree")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout(concat!(
            "Ordered graph size: 3\n",
            "A[-1] - B[2] - C[10] - NULL\n",
            "B[-1] - C[3] - NULL\n",
            "C[-1] - NULL\n",
            "Out degree of vertex A: 2\n",
            "In degree of vertex C: 2\n",
            "In degree of vertex A: 0\n",
            "Out degree of vertex C: 0\n",
        ));
}

#[test]
fn test_degree_keeps_file_order() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "3\nA\nB\nC\nA C 1\nA B 1\n");
    let queries = write_file(dir.path(), "queries.txt", "o A\n");

    graphq()
        .arg("degree")
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout(concat!(
            "Ordered graph size: 3\n",
            "A[-1] - C[1] - B[1] - NULL\n",
            "B[-1] - NULL\n",
            "C[-1] - NULL\n",
            "Out degree of vertex A: 2\n",
        ));
}

#[test]
fn test_self_loop_counts_both_ways() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "1\nA\nA A 7\n");
    let queries = write_file(dir.path(), "queries.txt", "o A\ni A\n");

    graphq()
        .args(["-q", "degree"])
        .arg(&graph)
        .arg(&queries)
        .assert()
        .success()
        .stdout("Out degree of vertex A: 1\nIn degree of vertex A: 1\n");
}
