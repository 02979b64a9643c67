pub mod check;
pub mod inspect;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::config::{load_config, GuardConfig};
use crate::core::validator::VersionGuard;
use crate::runtime::node::{override_present, NodeRuntime};

/// Inputs shared by the guard commands. Flags win over config file values,
/// which win over the shipped defaults.
#[derive(Args)]
pub struct GuardInputs {
    /// Guard configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Node.js version the host was built for
    #[arg(short, long, value_name = "vX.Y.Z")]
    pub required: Option<String>,

    /// Current runtime version (skips probing the node binary)
    #[arg(long, value_name = "vX.Y.Z")]
    pub current: Option<String>,

    /// Host application name used in messages
    #[arg(long, value_name = "NAME")]
    pub host_name: Option<String>,

    /// Override environment variable to honor
    #[arg(long, value_name = "VAR")]
    pub override_env: Option<String>,

    /// Node binary to probe for the current version
    #[arg(long, value_name = "PATH")]
    pub node_binary: Option<PathBuf>,
}

/// A guard with its inputs fully resolved: the override variable has been
/// probed and the current version string obtained, so evaluation itself
/// stays pure.
pub struct ResolvedGuard {
    pub guard: VersionGuard,
    pub current: String,
    pub override_present: bool,
}

impl GuardInputs {
    pub fn resolve(&self) -> Result<ResolvedGuard> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => GuardConfig::default(),
        };

        let host_name = self.host_name.clone().unwrap_or(config.host_name);
        let required = self.required.clone().unwrap_or(config.required_version);
        let override_env = self.override_env.clone().unwrap_or(config.override_env);

        let guard = VersionGuard::new(&host_name, &required, &override_env)?;

        let current = match &self.current {
            Some(version) => version.clone(),
            None => {
                let runtime = match self.node_binary.clone().or(config.node_binary.map(PathBuf::from)) {
                    Some(binary) => NodeRuntime::with_binary(binary),
                    None => NodeRuntime::new(),
                };
                runtime.reported_version()?
            }
        };

        let override_present = override_present(guard.override_env());

        Ok(ResolvedGuard {
            guard,
            current,
            override_present,
        })
    }
}
