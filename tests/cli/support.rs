use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Undirected graph from the classic BFS example
pub const UNDIRECTED_ABCD: &str = "4\nA\nB\nC\nD\nA B\nA C\nB D\n";

/// Directed weighted DAG where the two-hop path beats the direct edge
pub const WEIGHTED_DAG: &str = "3\nA\nB\nC\nA B 2\nB C 3\nA C 10\n";

/// Directed weighted 3-cycle
pub const WEIGHTED_CYCLE: &str = "3\nA\nB\nC\nA B 1\nB C 1\nC A 1\n";

/// Get a Command for graphq, isolated from any user config file
pub fn graphq() -> Command {
    let mut cmd = cargo_bin_cmd!("graphq");
    cmd.env(
        "GRAPHQ_CONFIG_DIR",
        std::env::temp_dir().join("graphq-tests-no-config"),
    );
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("GRAPHQ_LOG");
    cmd
}

/// Write `contents` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
