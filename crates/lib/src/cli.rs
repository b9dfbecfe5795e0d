//! Support for the binary front end.

pub(crate) mod error;
mod stderr_logger;

use anyhow::{anyhow, Result};

pub use self::error::{position, LineCol};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Install the stderr logger.
///
/// Diagnostics go to stderr so that stdout carries nothing but results.
pub fn init_logging() -> Result<()> {
    log::set_max_level(log::LevelFilter::Info);
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set logger: {error}"))?;
    Ok(())
}
