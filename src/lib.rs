#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `nslog` bundles the `logging` engine with the `logging-sink` output
//! implementations. Most programs only need [`console_logger`]:
//!
//! ```no_run
//! let log = nslog::console_logger();
//! log.info("app", "started");
//!
//! let db = log.wrap("db");
//! db.warn("slow query");
//! ```
//!
//! Everything from `logging` is re-exported at the crate root; the sinks live
//! under [`sink`].

pub use logging::*;
pub use logging_sink as sink;

use logging_sink::{ColorMode, ConsoleSink};

/// Builds a logger from `LOG_LEVEL` and `LOG_THEME` that writes to the console.
///
/// Invalid environment values fall back to the defaults (`info`, `light`).
/// Colour is used on streams attached to a terminal.
#[must_use]
pub fn console_logger() -> Logger {
    Logger::from_env().with_sink(ConsoleSink::new())
}

/// Builds a console logger from an explicit configuration and colour mode.
pub fn console_logger_with(config: LoggerConfig, color: ColorMode) -> Result<Logger, LoggerError> {
    Ok(Logger::new(config)?.with_sink(ConsoleSink::with_color(color)))
}
