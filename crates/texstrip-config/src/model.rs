//! Typed settings models for the launcher.

use std::path::PathBuf;

use serde::Deserialize;

/// Fully resolved launcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Blender executable invoked in background mode.
    pub blender: PathBuf,
    /// Helper script handed to Blender via `-P`.
    pub script: PathBuf,
}

/// On-disk schema of the optional `texstrip.toml` config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Blender executable path.
    pub blender: Option<PathBuf>,
    /// Helper script path.
    pub script: Option<PathBuf>,
}

/// Caller-supplied overrides, sourced from CLI flags or environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Blender executable override.
    pub blender: Option<PathBuf>,
    /// Helper script override.
    pub script: Option<PathBuf>,
    /// Explicit config file location.
    pub config: Option<PathBuf>,
}
