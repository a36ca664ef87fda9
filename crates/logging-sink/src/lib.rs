#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the [`OutputSink`](logging::OutputSink)
//! implementations used to put `logging` records on screen or into files.
//! A record arrives as a `%c` template, one style token per marker, and a list
//! of trailing arguments; the sinks here flatten it into a single line.
//!
//! # Design
//!
//! - [`render_record`] walks the template segments and, when colour is on,
//!   wraps each in the `anstyle` style that [`ansi::SgrStyle`] translates to.
//! - [`WriterSink`] wraps any [`std::io::Write`] implementor behind a mutex.
//! - [`ConsoleSink`] routes `error`/`warn` records to stderr and the rest to
//!   stdout, colouring each target under [`ColorMode::Auto`] only when it is
//!   a terminal.
//! - [`LineMode`] decides whether each record ends with a newline.
//!
//! # Invariants
//!
//! - One record is written with one `write_all`, so lines from concurrent
//!   callers never interleave.
//! - Uncoloured output contains every template segment, including ones whose
//!   style hides them.
//!
//! # Errors
//!
//! Sinks surface the [`std::io::Error`] of the underlying writer. The logger
//! reports it through `tracing` and carries on.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Logger, LoggerConfig};
//! use logging_sink::{ColorMode, WriterSink};
//!
//! let sink = Arc::new(WriterSink::new(Vec::new()).with_color(ColorMode::Never));
//! let logger = Logger::new(LoggerConfig::default().with_timestamps(false))?
//!     .with_sink(Arc::clone(&sink));
//!
//! logger.wrap("db").info("connected");
//! assert_eq!(sink.contents(), b"(info) [db] : connected\n");
//! # Ok::<(), logging::LoggerError>(())
//! ```

pub mod ansi;
mod color;
mod console;
mod line_mode;
mod render;
mod writer;

pub use color::{ColorMode, ParseColorModeError};
pub use console::{ConsoleSink, ConsoleTarget};
pub use line_mode::LineMode;
pub use render::render_record;
pub use writer::WriterSink;
