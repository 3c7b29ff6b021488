//! Error types for configuration resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Config file did not match the documented schema.
    #[error("failed to parse config file")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Source TOML error.
        source: toml::de::Error,
    },
    /// Location of the launcher executable could not be determined.
    #[error("failed to locate launcher executable")]
    ExeLocation {
        /// Source IO error.
        source: io::Error,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
