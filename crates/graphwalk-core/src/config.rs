use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{GraphError, GraphResult};

/// Weight assigned to an edge inserted without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Construction-time settings threaded into every graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub default_weight: Option<f64>,

    /// Reject edges whose endpoints were not added beforehand.
    #[serde(default)]
    pub strict_vertices: bool,
}

impl GraphConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/graphwalk/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("graphwalk/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("graphwalk\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        Self::load_or_default(Self::config_path().as_deref())
    }

    /// Load from `path` if it exists; defaults otherwise, with a warning when
    /// the file is present but cannot be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))?;
        if let Some(weight) = config.default_weight {
            if !weight.is_finite() {
                return Err(GraphError::InvalidWeight(weight));
            }
        }
        Ok(config)
    }

    pub fn effective_default_weight(&self) -> f64 {
        self.default_weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    pub fn strict(mut self) -> Self {
        self.strict_vertices = true;
        self
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = Some(weight);
        self
    }
}
