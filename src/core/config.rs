use serde::{Deserialize, Serialize};
use std::path::Path;

/// Guard configuration sourced from the host application's build metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Display name of the hosting application, used verbatim in messages
    pub host_name: String,
    /// Node.js version the host was built for (e.g. "v20.11.1")
    pub required_version: String,
    /// Environment variable whose presence downgrades a fatal mismatch
    /// to a warning
    pub override_env: String,
    /// Node binary used to probe the live runtime version
    pub node_binary: Option<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            host_name: "Argus".to_string(),
            required_version: "v20.11.1".to_string(),
            override_env: "ARGUS_NODE_HOME".to_string(), // user-managed node install
            node_binary: None, // resolved from PATH
        }
    }
}

pub fn default_config() -> GuardConfig {
    GuardConfig::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GuardConfig, crate::ArgusError> {
    let contents = std::fs::read_to_string(path)?;
    let config: GuardConfig = toml::from_str(&contents)
        .map_err(|e| crate::ArgusError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &GuardConfig) -> Result<(), crate::ArgusError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::ArgusError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
