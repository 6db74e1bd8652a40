//! Configuration for graphq (stored in ~/.config/graphq/config.toml)
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Command-line flags override whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphq";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHQ_CONFIG_DIR";

/// Default upper bound on the number of declared vertices
pub const DEFAULT_MAX_VERTICES: usize = 4096;

/// What to do with an edge whose endpoint is not a declared vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingEdgePolicy {
    /// Fail the load with `DanglingEdge`
    #[default]
    Reject,
    /// Drop the edge and log a warning
    Skip,
}

/// Graph construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub max_vertices: usize,
    pub dangling_edges: DanglingEdgePolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            dangling_edges: DanglingEdgePolicy::Reject,
        }
    }
}

/// Query batch settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Stop the batch at the first failing query
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub query: QueryConfig,
}

impl Config {
    fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; the default location may be absent, in
    /// which case defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GraphError::io_operation(
                        "read config",
                        path.display(),
                        "file does not exist",
                    ));
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => path,
                Ok(_) => return Ok(Self::default()),
                Err(e) => {
                    tracing::debug!(error = %e, "no config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;

        let config: Config = toml::from_str(&content)?;
        if config.graph.max_vertices == 0 {
            crate::bail_invalid!("graph.max_vertices", 0);
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
