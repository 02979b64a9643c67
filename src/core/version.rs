use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::ArgusError;

// Compiled once to avoid repeated pattern builds
static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| {
        Regex::new(r"^v(\d+)\.(\d+)\.(\d+)").expect("version pattern must compile")
    })
}

/// A Node.js runtime version as reported by `process.version` or
/// `node --version`: a `v`-prefixed major/minor/patch triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl NodeVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `vMAJOR.MINOR.PATCH` string.
    ///
    /// Trailing pre-release or build text after the patch digits is tolerated
    /// and ignored (`v18.17.1-nightly20230801` parses as 18.17.1). Anything
    /// that does not match the anchored pattern is rejected rather than
    /// defaulted, since a silent `0.0.0` could mask a real incompatibility.
    pub fn parse(input: &str) -> Result<Self, ArgusError> {
        let caps = version_pattern().captures(input).ok_or_else(|| {
            ArgusError::MalformedVersion(format!(
                "expected vMAJOR.MINOR.PATCH, got {:?}",
                input
            ))
        })?;

        let component = |i: usize| -> Result<u32, ArgusError> {
            caps[i].parse().map_err(|_| {
                ArgusError::MalformedVersion(format!(
                    "version component {:?} out of range in {:?}",
                    &caps[i], input
                ))
            })
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for NodeVersion {
    type Err = ArgusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
