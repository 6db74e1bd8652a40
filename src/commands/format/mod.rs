//! Output formatting for query results
//!
//! - `human`: the plain-text layout of the classic graph query programs
//! - `json`: one serde document per line

pub mod human;
pub mod json;
