use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{ArgusError, Result};

/// Handle on the Node.js binary whose version is being validated.
pub struct NodeRuntime {
    binary: PathBuf,
}

impl NodeRuntime {
    /// Use the `node` binary resolved from PATH.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("node"),
        }
    }

    /// Use a specific node binary.
    pub fn with_binary<P: AsRef<Path>>(binary: P) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Ask the runtime for its own version string (`node --version`).
    ///
    /// Returns the trimmed raw output (e.g. `v20.11.1`); parsing and
    /// validation are left to the guard.
    pub fn reported_version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|e| {
                ArgusError::Runtime(format!(
                    "Failed to run {} --version: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(ArgusError::Runtime(format!(
                "{} --version returned error",
                self.binary.display()
            )));
        }

        let version = String::from_utf8_lossy(&output.stdout);
        let version = version.trim().to_string();
        tracing::debug!("{} reports {}", self.binary.display(), version);
        Ok(version)
    }
}

impl Default for NodeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the override variable is set to a non-empty value.
///
/// Only presence is interpreted; the content (typically a path to a
/// user-managed node install) is never parsed.
pub fn override_present(var: &str) -> bool {
    std::env::var(var).map(|v| !v.is_empty()).unwrap_or(false)
}
