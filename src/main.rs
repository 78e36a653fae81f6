// In src/main.rs

// Declare modules
pub mod ansi;
pub mod cli;
pub mod color;
pub mod colorizer;
pub mod config;
pub mod encoder;
pub mod runner;
pub mod source;

use crate::{
    cli::Args,
    config::Config,
    runner::RunStatus,
    source::FsOpener,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Exit status for usage errors and fatal failures.
const EXIT_FAILURE: u8 = 1;

/// Main entry point for `rainbowcat`.
fn main() -> ExitCode {
    // Stay quiet unless RUST_LOG asks for more; stdout carries the payload.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    restore_default_sigpipe();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also come through here, on stdout.
            let code = if err.use_stderr() { EXIT_FAILURE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run_app(args) {
        Ok(status) => {
            if status != RunStatus::Clean {
                info!("run finished with status {:?}", status);
            }
            ExitCode::from(status.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run_app(args: Args) -> anyhow::Result<RunStatus> {
    let config = Config::from_args(args, &mut rand::thread_rng())?;
    debug!(
        "effective configuration (color mode {}): {}",
        config.mode,
        serde_json::to_string(&config).context("Failed to serialize configuration")?
    );

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    runner::run(&config, &mut FsOpener, out).context("Failed to write colorized output")
}

/// Rust ignores SIGPIPE by default, which turns `rainbowcat big | head` into a
/// write error. Restore the default so a closed pipe ends the process quietly.
#[cfg(unix)]
fn restore_default_sigpipe() {
    // SAFETY: resetting a signal disposition to SIG_DFL before any other
    // threads exist has no memory-safety implications.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn restore_default_sigpipe() {}
