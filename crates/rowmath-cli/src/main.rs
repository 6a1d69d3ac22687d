// SPDX-License-Identifier: Apache-2.0
//! rowmath CLI entrypoint.
//!
//! Builds row-vector 4x4 matrices (affine, projection, viewport), inverts
//! them, and applies them to points. `rowmath demo` prints the axis-angle
//! rotation configured in the saved demo preferences.
//!
//! # Usage
//! ```text
//! rowmath [--format text|json] [--config-dir <dir>] [-v] <command> [options]
//! ```
//!
//! Results go to stdout; warnings and logs go to stderr. The CLI exits with
//! code `0` on success and non-zero on error.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use rowmath_app_core::config::ConfigService;
use rowmath_app_core::prefs::{DemoPrefs, DEMO_PREFS_KEY};
use rowmath_config_fs::FsConfigStore;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::output::Format;

#[derive(Parser, Debug)]
#[command(author, version, about = "Row-vector 3D math from the terminal")]
struct Args {
    /// Output format for results
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Directory holding `demo.json` (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Command to execute
    #[command(subcommand)]
    cmd: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let prefs = load_prefs(args.config_dir.as_deref());
    debug!(?prefs, "demo prefs");

    let report = commands::run(&args.cmd, &prefs)?;
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    println!("{}", output::render(&report.output, prefs.precision, args.format)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads demo prefs best-effort; any config failure falls back to defaults.
///
/// Defaults are persisted once when no prefs exist yet. An unreadable file is
/// left untouched, and out-of-range fields are reset for this run only.
fn load_prefs(config_dir: Option<&Path>) -> DemoPrefs {
    let store = match config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    };
    let config = match store {
        Ok(store) => ConfigService::new(store),
        Err(err) => {
            warn!(%err, "config store unavailable; using default prefs");
            return DemoPrefs::default();
        }
    };
    match config.load_or_init::<DemoPrefs>(DEMO_PREFS_KEY) {
        Ok(mut prefs) => {
            for field in prefs.sanitize() {
                warn!(field, "demo prefs value out of range; using default");
            }
            prefs
        }
        Err(err) => {
            warn!(
                %err,
                path = %config.store().path_for(DEMO_PREFS_KEY).display(),
                "could not load demo prefs; using defaults"
            );
            DemoPrefs::default()
        }
    }
}
