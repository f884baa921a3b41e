use crate::installer::{Agent, Scope};
use crate::sync_check::HashAlgorithm;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding config files, both in the project and in the home directory
pub const CONFIG_DIR: &str = ".prose";

/// Configuration for the sync checker
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SyncConfig {
    #[serde(default)]
    pub algorithm: Option<HashAlgorithm>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Overrides data directory discovery
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_scope: Option<Scope>,
    #[serde(default)]
    pub default_agent: Option<Agent>,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration from default paths
    /// Priority: local (.prose/config.local.toml) > project (.prose/config.toml) > user (~/.prose/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(CONFIG_DIR).join("config.toml");
            if user_config.exists() {
                config.merge(Self::load_from(&user_config)?);
            }
        }

        let project_config = Path::new(CONFIG_DIR).join("config.toml");
        if project_config.exists() {
            config.merge(Self::load_from(&project_config)?);
        }

        // Should be gitignored
        let local_config = Path::new(CONFIG_DIR).join("config.local.toml");
        if local_config.exists() {
            config.merge(Self::load_from(&local_config)?);
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Merge another config into this one (other takes priority where set)
    pub fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.default_scope.is_some() {
            self.default_scope = other.default_scope;
        }
        if other.default_agent.is_some() {
            self.default_agent = other.default_agent;
        }
        if other.sync.algorithm.is_some() {
            self.sync.algorithm = other.sync.algorithm;
        }
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.sync.algorithm.unwrap_or_default()
    }
}
