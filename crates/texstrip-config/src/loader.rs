//! Layered resolution of the Blender executable and helper script paths.
//!
//! Precedence, highest first: caller override, config file, built-in
//! default. Environment variables arrive through the caller override layer
//! (the CLI surfaces them via clap's `env` support).

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{ConfigFile, Overrides, Settings};

/// File name of the implicit config file searched beside the executable.
pub const CONFIG_FILE_NAME: &str = "texstrip.toml";

/// File name of the helper script expected beside the executable by default.
pub const DEFAULT_SCRIPT_NAME: &str = "unpack_textures.py";

#[cfg(target_os = "windows")]
const DEFAULT_BLENDER_PATH: &str =
    r"C:\Program Files\Blender Foundation\Blender 4.2\blender.exe";
#[cfg(target_os = "macos")]
const DEFAULT_BLENDER_PATH: &str = "/Applications/Blender.app/Contents/MacOS/Blender";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_BLENDER_PATH: &str = "/usr/bin/blender";

/// Resolve launcher settings from overrides, config file, and defaults.
///
/// An explicitly named config file must exist and parse; the implicit
/// `texstrip.toml` beside the launcher executable is optional.
///
/// # Errors
///
/// Returns an error if the launcher executable cannot be located, or if a
/// config file fails to read or parse.
pub fn resolve(overrides: &Overrides) -> ConfigResult<Settings> {
    let exe_dir = executable_dir()?;
    let file = match &overrides.config {
        Some(path) => Some(load_config_file(path)?),
        None => load_optional_config_file(&exe_dir.join(CONFIG_FILE_NAME))?,
    };
    Ok(resolve_with(overrides, file.as_ref(), &exe_dir))
}

/// Pure resolution core shared by [`resolve`] and tests.
#[must_use]
pub fn resolve_with(overrides: &Overrides, file: Option<&ConfigFile>, exe_dir: &Path) -> Settings {
    let blender = overrides
        .blender
        .clone()
        .or_else(|| file.and_then(|file| file.blender.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BLENDER_PATH));
    let script = overrides
        .script
        .clone()
        .or_else(|| file.and_then(|file| file.script.clone()))
        .unwrap_or_else(|| exe_dir.join(DEFAULT_SCRIPT_NAME));
    debug!(
        blender = %blender.display(),
        script = %script.display(),
        "resolved launcher settings"
    );
    Settings { blender, script }
}

/// Load and parse a config file that must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid for the
/// documented schema.
pub fn load_config_file(path: &Path) -> ConfigResult<ConfigFile> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_optional_config_file(path: &Path) -> ConfigResult<Option<ConfigFile>> {
    match fs::read_to_string(path) {
        Ok(text) => toml::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn executable_dir() -> ConfigResult<PathBuf> {
    let exe = env::current_exe().map_err(|source| ConfigError::ExeLocation { source })?;
    Ok(exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}
