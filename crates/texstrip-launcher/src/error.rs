//! Error types for the launch pipeline.
//!
//! Messages stay constant; context rides in fields so callers can render
//! diagnostics that name the offending path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for launch operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Blender executable was not found on disk.
    #[error("blender executable not found")]
    MissingTool {
        /// Configured tool path.
        path: PathBuf,
    },
    /// Helper script was not found on disk.
    #[error("helper script not found")]
    MissingScript {
        /// Configured script path.
        path: PathBuf,
    },
    /// User-supplied input file was not found on disk.
    #[error("input file not found")]
    MissingInput {
        /// Input path supplied via `-f`.
        path: PathBuf,
    },
    /// Child process could not be started.
    #[error("failed to spawn blender")]
    Spawn {
        /// Tool path that failed to spawn.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Child process ran but exited with a failure status.
    #[error("blender exited with a failure status")]
    ChildFailed {
        /// Exit code of the child, when one was produced.
        code: Option<i32>,
    },
}

/// Convenience alias for launch results.
pub type LaunchResult<T> = Result<T, LaunchError>;
