//! Invocation request construction and validation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use texstrip_config::Settings;

use crate::error::{LaunchError, LaunchResult};

/// Background (headless) mode flag.
const FLAG_BACKGROUND: &str = "-b";
/// "Run this Python script" flag.
const FLAG_RUN_SCRIPT: &str = "-P";
/// Separates Blender's own arguments from the script's.
const ARG_SEPARATOR: &str = "--";
/// Input option consumed by the helper script.
const FLAG_SCRIPT_INPUT: &str = "--input";

/// One validated launch of the external tool.
///
/// Built once per run, immutable after construction, and discarded after
/// the child process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    tool_path: PathBuf,
    script_path: PathBuf,
    input_path: PathBuf,
}

impl InvocationRequest {
    /// Build a request from resolved settings and the user-supplied input.
    #[must_use]
    pub fn new(settings: &Settings, input_path: PathBuf) -> Self {
        Self {
            tool_path: settings.blender.clone(),
            script_path: settings.script.clone(),
            input_path,
        }
    }

    /// Blender executable to invoke.
    #[must_use]
    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    /// Helper script handed to Blender via `-P`.
    #[must_use]
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Input file handed to the helper script via `--input`.
    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Check the three paths in order: tool, then script, then input.
    ///
    /// The chain is fail-fast: the first missing path aborts the run and
    /// later checks are not attempted.
    ///
    /// # Errors
    ///
    /// Returns the variant naming the first missing path.
    pub fn validate(&self) -> LaunchResult<()> {
        if !self.tool_path.exists() {
            return Err(LaunchError::MissingTool {
                path: self.tool_path.clone(),
            });
        }
        if !self.script_path.exists() {
            return Err(LaunchError::MissingScript {
                path: self.script_path.clone(),
            });
        }
        if !self.input_path.exists() {
            return Err(LaunchError::MissingInput {
                path: self.input_path.clone(),
            });
        }
        Ok(())
    }

    /// Arguments handed to the tool: `-b -P <script> -- --input <file>`.
    #[must_use]
    pub fn tool_args(&self) -> Vec<OsString> {
        vec![
            OsString::from(FLAG_BACKGROUND),
            OsString::from(FLAG_RUN_SCRIPT),
            self.script_path.clone().into_os_string(),
            OsString::from(ARG_SEPARATOR),
            OsString::from(FLAG_SCRIPT_INPUT),
            self.input_path.clone().into_os_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn request(tool: &Path, script: &Path, input: &Path) -> InvocationRequest {
        let settings = Settings {
            blender: tool.to_path_buf(),
            script: script.to_path_buf(),
        };
        InvocationRequest::new(&settings, input.to_path_buf())
    }

    #[test]
    fn tool_args_follow_the_blender_contract() {
        let request = request(
            Path::new("/usr/bin/blender"),
            Path::new("/opt/texstrip/unpack_textures.py"),
            Path::new("model.fbx"),
        );
        let expected: Vec<OsString> = [
            "-b",
            "-P",
            "/opt/texstrip/unpack_textures.py",
            "--",
            "--input",
            "model.fbx",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(request.tool_args(), expected);
    }

    #[test]
    fn identical_requests_build_identical_command_lines() {
        let first = request(
            Path::new("/usr/bin/blender"),
            Path::new("unpack_textures.py"),
            Path::new("model.fbx"),
        );
        let second = request(
            Path::new("/usr/bin/blender"),
            Path::new("unpack_textures.py"),
            Path::new("model.fbx"),
        );
        assert_eq!(first, second);
        assert_eq!(first.tool_args(), second.tool_args());
    }

    #[test]
    fn missing_tool_fails_before_script_and_input() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let request = request(
            &dir.path().join("blender"),
            &dir.path().join("unpack_textures.py"),
            &dir.path().join("model.fbx"),
        );
        let err = request.validate().expect_err("tool is missing");
        assert!(matches!(err, LaunchError::MissingTool { path } if path == dir.path().join("blender")));
        Ok(())
    }

    #[test]
    fn missing_script_is_reported_once_the_tool_exists() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let tool = dir.path().join("blender");
        fs::write(&tool, b"")?;
        let request = request(
            &tool,
            &dir.path().join("unpack_textures.py"),
            &dir.path().join("model.fbx"),
        );
        let err = request.validate().expect_err("script is missing");
        assert!(matches!(err, LaunchError::MissingScript { .. }));
        Ok(())
    }

    #[test]
    fn missing_input_is_reported_last() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let tool = dir.path().join("blender");
        let script = dir.path().join("unpack_textures.py");
        fs::write(&tool, b"")?;
        fs::write(&script, b"")?;
        let request = request(&tool, &script, &dir.path().join("model.fbx"));
        let err = request.validate().expect_err("input is missing");
        assert!(matches!(err, LaunchError::MissingInput { path } if path == dir.path().join("model.fbx")));
        Ok(())
    }

    #[test]
    fn validation_passes_when_all_paths_exist() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let tool = dir.path().join("blender");
        let script = dir.path().join("unpack_textures.py");
        let input = dir.path().join("model.fbx");
        fs::write(&tool, b"")?;
        fs::write(&script, b"")?;
        fs::write(&input, b"")?;
        request(&tool, &script, &input).validate()?;
        Ok(())
    }
}
