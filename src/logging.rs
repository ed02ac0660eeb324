//! Logging setup for the filename-manager CLI.
//!
//! The library only emits `tracing` events. The binary installs one
//! subscriber with two layers:
//! - stderr, at a level picked by `-v` count (or `RUST_LOG` when set)
//! - an optional log file that always records DEBUG and above

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Map a `-v` count to a console level: WARN, INFO, then DEBUG.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		_ => LevelFilter::DEBUG,
	}
}

/// Install the global subscriber.
///
/// A log file that cannot be opened is reported on the console and skipped.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) {
	let console_filter = EnvFilter::builder()
		.with_default_directive(level_for_verbosity(verbosity).into())
		.from_env_lossy();

	let console_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.with_filter(console_filter);

	let mut file_error = None;
	let file_layer = log_file.and_then(|path| {
		match OpenOptions::new().create(true).append(true).open(path) {
			Ok(file) => Some(
				tracing_subscriber::fmt::layer()
					.with_writer(Mutex::new(file))
					.with_ansi(false)
					.with_target(true)
					.with_filter(LevelFilter::DEBUG),
			),
			Err(e) => {
				file_error = Some((path, e));
				None
			}
		}
	});

	tracing_subscriber::registry()
		.with(console_layer)
		.with(file_layer)
		.init();

	match file_error {
		Some((path, e)) => {
			tracing::error!("Could not set up log file '{}': {}", path.display(), e);
		}
		None => {
			if let Some(path) = log_file {
				tracing::info!("Logging to file: {}", path.display());
			}
		}
	}
}
