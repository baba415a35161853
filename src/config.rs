//! Configuration management
//!
//! Settings live in `config.toml` inside the quotebook home
//! (`~/.quotebook/` unless overridden). A missing or unreadable file
//! yields the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::CategoryMatching;
use crate::paths;

/// Default mock endpoint for server sync
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default category given to quotes fetched from the server
pub const DEFAULT_SERVER_CATEGORY: &str = "Server";

/// Default polling interval in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// quotebook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Category filter settings
    #[serde(default)]
    pub filter: FilterConfig,
    /// Server sync settings
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Category filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Compare categories case-sensitively
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Server sync settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Whether any remote call is made
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Posts endpoint used for fetch and push
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum posts requested per fetch
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Category assigned to fetched quotes
    #[serde(default = "default_category")]
    pub category: String,
    /// Seconds between polls in `watch` mode
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_limit() -> usize {
    5
}

fn default_category() -> String {
    DEFAULT_SERVER_CATEGORY.to_string()
}

const fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            limit: default_limit(),
            category: default_category(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl Config {
    /// Load config from a home directory, or defaults if absent or invalid
    #[must_use]
    pub fn load(home: &Path) -> Self {
        let path = paths::config_file(home);
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str::<Self>(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring invalid config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config into a home directory
    pub fn save(&self, home: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(home)?;
        let content = toml::to_string_pretty(self)?;
        fs::write(paths::config_file(home), content)?;
        Ok(())
    }

    /// Category matching mode derived from the filter settings
    #[must_use]
    pub const fn matching(&self) -> CategoryMatching {
        CategoryMatching::from_case_sensitive(self.filter.case_sensitive)
    }
}
