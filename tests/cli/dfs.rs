use crate::cli::support::{graphq, write_file};
use tempfile::tempdir;

// ============================================================================
// DFS command tests
// ============================================================================

const TREE: &str = "5\nA\nB\nC\nD\nE\nA C 1\nA B 1\nB D 1\nC E 1\n";

#[test]
fn test_dfs_sorted_preorder() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", TREE);

    graphq()
        .arg("dfs")
        .arg(&graph)
        .assert()
        .success()
        .stdout(concat!(
            "Ordered graph size: 5\n",
            "A[-1] - B[1] - C[1] - NULL\n",
            "B[-1] - D[1] - NULL\n",
            "C[-1] - E[1] - NULL\n",
            "D[-1] - NULL\n",
            "E[-1] - NULL\n",
            "A B D C E \n",
        ));
}

#[test]
fn test_dfs_covers_every_component() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "4\nD\nC\nB\nA\nC A 1\n");

    graphq()
        .args(["-q", "dfs"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("D C A B \n");
}
