#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Layered configuration for the texstrip launcher.
//!
//! Layout: `model.rs` (typed settings and the `texstrip.toml` schema),
//! `loader.rs` (layered path resolution), `error.rs` (typed failures).

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, DEFAULT_SCRIPT_NAME, load_config_file, resolve, resolve_with};
pub use model::{ConfigFile, Overrides, Settings};
