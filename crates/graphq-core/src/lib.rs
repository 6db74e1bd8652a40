//! Graphq Core Library
//!
//! Graph model, traversal and shortest-path engine, and the file formats
//! behind the graphq query programs.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
pub mod query;
