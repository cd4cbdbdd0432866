//! Node-side configuration for peer communication.
//!
//! Settings come from an optional TOML file layered under `ZOLD_`-prefixed
//! environment variables. A missing file is not an error; every field has a
//! default.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const DEFAULT_NETWORK: &str = "test";
const DEFAULT_TIMEOUT_SECS: u64 = 16;

/// Peer-communication settings shared by every client this node creates.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Logical network this node belongs to, sent as `X-Zold-Network`.
    /// An empty string omits the header.
    #[serde(default = "default_network")]
    pub network: String,

    /// Default per-call deadline, in whole seconds. Must be strictly
    /// positive.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NodeConfig {
    /// The default deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Loads configuration from `path` (if it exists) with `ZOLD_`-prefixed
/// environment variables layered on top.
pub fn load_configuration(path: &Path) -> Result<NodeConfig> {
    let mut builder = Config::builder();

    if path.exists() {
        let filename = path.to_str().context("Invalid config file path")?;
        builder = builder.add_source(config::File::with_name(filename));
    }

    let cfg = builder
        .add_source(Environment::with_prefix("ZOLD").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build config")?;

    let node: NodeConfig = cfg.try_deserialize().context("Invalid configuration values")?;
    anyhow::ensure!(node.timeout_secs > 0, "timeout_secs must be strictly positive");

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn falls_back_to_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_configuration(&dir.path().join("zold.toml")).unwrap();
        assert_eq!("test", cfg.network);
        assert_eq!(Duration::from_secs(16), cfg.timeout());
    }

    #[test]
    fn reads_settings_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zold.toml");
        fs::write(&path, "network = \"mainnet\"\ntimeout_secs = 4\n").unwrap();

        let cfg = load_configuration(&path).unwrap();

        assert_eq!("mainnet", cfg.network);
        assert_eq!(Duration::from_secs(4), cfg.timeout());
    }

    #[test]
    fn rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zold.toml");
        fs::write(&path, "timeout_secs = 0\n").unwrap();

        assert!(load_configuration(&path).is_err());
    }
}
