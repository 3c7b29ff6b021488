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
#![allow(clippy::module_name_repetitions, clippy::redundant_pub_crate)]

//! Binary entrypoint: parses the launcher arguments, resolves settings,
//! and drives one Blender texture-unpack run.

mod cli;
mod error;
mod telemetry;

use std::io::{self, IsTerminal, Write};
use std::process;

use clap::Parser;
use texstrip_config::Overrides;
use texstrip_launcher::{InvocationRequest, ensure_success};

use crate::cli::Cli;
use crate::error::CliResult;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = telemetry::init_logging() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }

    let pause = !cli.no_pause;
    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    };

    pause_before_exit(pause);
    if exit_code != 0 {
        process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let overrides = Overrides {
        blender: cli.blender,
        script: cli.script,
        config: cli.config,
    };
    let settings = texstrip_config::resolve(&overrides)?;
    let request = InvocationRequest::new(&settings, cli.file);
    let status = texstrip_launcher::run(&request).await?;
    println!("--- texture unpack finished ---");
    ensure_success(status)?;
    Ok(())
}

/// Hold the console open for an operator launching from a file manager.
/// Skipped under `--no-pause` or whenever stdin is not a terminal.
fn pause_before_exit(pause: bool) {
    if !pause || !io::stdin().is_terminal() {
        return;
    }
    eprint!("press enter to close... ");
    if io::stderr().flush().is_err() {
        return;
    }
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
