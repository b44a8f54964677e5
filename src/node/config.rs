use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Listen addresses for the two transports.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub http_addr: String,
    pub rpc_addr: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            rpc_addr: "0.0.0.0:9090".to_string(),
        }
    }
}

impl NodeConfig {
    /// Load the config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let cfg: NodeConfig = toml::from_str(&data)?;
        Ok(cfg)
    }
}
