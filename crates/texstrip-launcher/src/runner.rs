//! Child-process execution for a validated invocation.

use std::path::Path;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{info, warn};

use crate::error::{LaunchError, LaunchResult};
use crate::invocation::InvocationRequest;

/// Extension the helper script expects on its input.
const EXPECTED_EXTENSION: &str = "fbx";

/// Validate the request, run the tool to completion, and return its exit
/// status.
///
/// The child inherits the launcher's stdin/stdout/stderr, so Blender's
/// console output streams straight through. The wait is synchronous: no
/// timeout, no cancellation, no retries. A completion banner is logged
/// after the child exits regardless of its status; judging the status is
/// left to [`ensure_success`].
///
/// # Errors
///
/// Returns an error if a validation check fails or the child cannot be
/// spawned.
pub async fn run(request: &InvocationRequest) -> LaunchResult<ExitStatus> {
    request.validate()?;
    if !has_expected_extension(request.input_path()) {
        warn!(
            input = %request.input_path().display(),
            "input does not carry the .fbx extension; the unpack script may reject it"
        );
    }
    info!(
        tool = %request.tool_path().display(),
        script = %request.script_path().display(),
        input = %request.input_path().display(),
        "launching blender in background mode"
    );
    let status = Command::new(request.tool_path())
        .args(request.tool_args())
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            path: request.tool_path().to_path_buf(),
            source,
        })?;
    info!(code = status.code(), "blender run finished");
    Ok(status)
}

/// Convert a non-success exit status into [`LaunchError::ChildFailed`].
///
/// # Errors
///
/// Returns `ChildFailed` carrying the child's exit code, or `None` when
/// the child was terminated without one (for example by a signal).
pub fn ensure_success(status: ExitStatus) -> LaunchResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::ChildFailed {
            code: status.code(),
        })
    }
}

fn has_expected_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPECTED_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_expected_extension(Path::new("model.fbx")));
        assert!(has_expected_extension(Path::new("model.FBX")));
        assert!(!has_expected_extension(Path::new("model.obj")));
        assert!(!has_expected_extension(Path::new("model")));
    }
}
