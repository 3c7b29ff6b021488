//! Argument surface for the `texstrip` binary.

use std::path::PathBuf;

use clap::Parser;

/// Launch Blender headless to unpack embedded FBX textures.
#[derive(Debug, Parser)]
#[command(
    name = "texstrip",
    about = "Launch Blender headless to unpack embedded FBX textures"
)]
pub(crate) struct Cli {
    /// Input file handed to the unpack script. Repeats are last-write-wins.
    #[arg(short = 'f', long = "file", value_name = "FILE", overrides_with = "file")]
    pub(crate) file: PathBuf,
    /// Blender executable to invoke.
    #[arg(long, env = "TEXSTRIP_BLENDER", value_name = "PATH")]
    pub(crate) blender: Option<PathBuf>,
    /// Helper script handed to Blender.
    #[arg(long, env = "TEXSTRIP_SCRIPT", value_name = "PATH")]
    pub(crate) script: Option<PathBuf>,
    /// Config file location (defaults to `texstrip.toml` beside the binary).
    #[arg(long, env = "TEXSTRIP_CONFIG", value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
    /// Skip the interactive pause before exit.
    #[arg(long)]
    pub(crate) no_pause: bool,
}
