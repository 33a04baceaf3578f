#![cfg(feature = "std")]

//! Diagnostics go to stderr so they never mix with the game screen on stdout.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "BATTLEBOATS_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("battleboats")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn parse_level(value: Option<&str>) -> Result<LevelFilter, String> {
    match value {
        None => Ok(LevelFilter::Warn),
        Some(v) => v.trim().parse().map_err(|_| v.to_string()),
    }
}

/// Install the stderr logger at the level named by [`LOG_ENV`], `warn` when
/// unset. An unrecognised value falls back to `warn` and says so.
pub fn init_logging() {
    let value = env::var(LOG_ENV).ok();
    let (level, rejected) = match parse_level(value.as_deref()) {
        Ok(level) => (level, None),
        Err(bad) => (LevelFilter::Warn, Some(bad)),
    };
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(level);
    if let Some(bad) = rejected {
        log::warn!("ignoring {}={:?}, using warn", LOG_ENV, bad);
    }
}
