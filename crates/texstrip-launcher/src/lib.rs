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

//! Single-shot launcher core.
//!
//! Builds an [`InvocationRequest`] from resolved settings, validates the
//! tool, script, and input paths in a fail-fast chain, and runs Blender in
//! background mode to execute the texture-unpack helper script.

pub mod error;
pub mod invocation;
pub mod runner;

pub use error::{LaunchError, LaunchResult};
pub use invocation::InvocationRequest;
pub use runner::{ensure_success, run};
