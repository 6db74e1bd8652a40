use crate::cli::support::{graphq, write_file};
use tempfile::tempdir;

// ============================================================================
// Show command tests
// ============================================================================

const UNSORTED: &str = "3\nA\nB\nC\nA C 10\nA B 2\n";

#[test]
fn test_show_keeps_file_order() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNSORTED);

    graphq()
        .arg("show")
        .arg(&graph)
        .assert()
        .success()
        .stdout("Ordered graph size: 3\nA[-1] - C[10] - B[2] - NULL\nB[-1] - NULL\nC[-1] - NULL\n");
}

#[test]
fn test_show_sorted() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", UNSORTED);

    graphq()
        .args(["show", "--sorted"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Ordered graph size: 3\nA[-1] - B[2] - C[10] - NULL\nB[-1] - NULL\nC[-1] - NULL\n");
}

#[test]
fn test_show_undirected_self_loop_stored_once() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "2\nA\nB\nA A\nA B\n");

    graphq()
        .args(["show", "--kind", "undirected"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Undirected graph size: 2\nA - A - B - NULL\nB - A - NULL\n");
}

#[test]
fn test_show_ignores_quiet() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "1\nA\n");

    graphq()
        .args(["--quiet", "show"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Ordered graph size: 1\nA[-1] - NULL\n");
}
