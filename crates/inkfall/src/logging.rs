//! Log file setup.
//!
//! The terminal belongs to the animation, so logs go to
//! `<data dir>/inkfall.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use inkfall_config::Config;
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory.
const LOG_FILE: &str = "inkfall.log";

/// Default filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Returns the log path, or `None` if logging
/// is disabled because the file could not be opened.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbose: u8) -> Option<PathBuf> {
    let dir = Config::data_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
