//! Logger installation for the binary and a progress sink that reports
//! through the `log` facade. The library itself only emits records.

use compendium_pack_api::ProgressSink;
use log::{LevelFilter, SetLoggerError, info};

/// Map a `-v` count to a level: warnings by default, then info, debug and
/// trace.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install `env_logger` at the level implied by `verbosity`. `RUST_LOG`
/// directives still apply per module.
///
/// # Errors
///
/// Fails when a logger is already installed.
pub fn initialize(verbosity: u8) -> Result<(), SetLoggerError> {
	env_logger::Builder::new()
		.filter_level(level_for(verbosity))
		.parse_default_env()
		.format_timestamp_secs()
		.try_init()
}

/// Reports pack loading progress as info records.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
	fn advance(&mut self, message: &str) {
		info!("{message}");
	}

	fn close(&mut self, message: &str) {
		info!("{message}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_level() {
		assert_eq!(level_for(0), LevelFilter::Warn);
		assert_eq!(level_for(1), LevelFilter::Info);
		assert_eq!(level_for(2), LevelFilter::Debug);
		assert_eq!(level_for(9), LevelFilter::Trace);
	}
}
