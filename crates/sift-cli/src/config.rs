use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sift_diff::DiffOptions;
use sift_router::MatcherConfig;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "sift.toml";

/// Project configuration (sift.toml)
///
/// ```toml
/// [router]
/// param_marker = ":"
///
/// [diff]
/// equality = "strict"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub router: MatcherConfig,
    pub diff: DiffOptions,
}

impl SiftConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Resolve configuration: explicit file, then `dir/sift.toml`, then defaults
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!("Loading config from {}", fallback.display());
            Self::from_file(&fallback)
        } else {
            tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }
}
