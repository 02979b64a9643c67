pub mod cli;
pub mod core;
pub mod runtime;

pub use crate::core::validator::{enforce, Verdict, VersionGuard};
pub use crate::core::version::NodeVersion;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed version string: {0}")]
    MalformedVersion(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ArgusError>;

/// Version information for the Argus project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
