//! CLI-level error mapping: user-facing messages and exit codes.

use texstrip_config::ConfigError;
use texstrip_launcher::LaunchError;

/// Failures surfaced by the binary.
#[derive(Debug)]
pub(crate) enum CliError {
    /// Configuration resolution failed.
    Config(ConfigError),
    /// Validation or child-process execution failed.
    Launch(LaunchError),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit code: `1` for configuration and validation failures,
    /// the child's own exit code when the child ran and failed.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Launch(LaunchError::ChildFailed { code }) => code.unwrap_or(1),
            Self::Config(_) | Self::Launch(_) => 1,
        }
    }

    /// Human-readable diagnostic naming the offending path.
    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Config(ConfigError::Read { path, source }) => {
                format!("failed to read config file {}: {source}", path.display())
            }
            Self::Config(ConfigError::Parse { path, source }) => {
                format!("invalid config file {}: {source}", path.display())
            }
            Self::Config(ConfigError::ExeLocation { source }) => {
                format!("failed to locate the launcher executable: {source}")
            }
            Self::Launch(LaunchError::MissingTool { path }) => {
                format!("blender executable not found: {}", path.display())
            }
            Self::Launch(LaunchError::MissingScript { path }) => {
                format!("helper script not found: {}", path.display())
            }
            Self::Launch(LaunchError::MissingInput { path }) => {
                format!("input file not found: {}", path.display())
            }
            Self::Launch(LaunchError::Spawn { path, source }) => {
                format!("failed to spawn blender at {}: {source}", path.display())
            }
            Self::Launch(LaunchError::ChildFailed { code }) => match code {
                Some(code) => format!("blender exited with status {code}"),
                None => "blender terminated without an exit code".to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        Self::Config(source)
    }
}

impl From<LaunchError> for CliError {
    fn from(source: LaunchError) -> Self {
        Self::Launch(source)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_path_diagnostics_name_the_path() {
        let err = CliError::from(LaunchError::MissingTool {
            path: PathBuf::from("/usr/bin/blender"),
        });
        assert!(err.display_message().contains("/usr/bin/blender"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn child_failure_propagates_its_exit_code() {
        let err = CliError::from(LaunchError::ChildFailed { code: Some(7) });
        assert_eq!(err.exit_code(), 7);

        let signalled = CliError::from(LaunchError::ChildFailed { code: None });
        assert_eq!(signalled.exit_code(), 1);
    }
}
