#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a namespace-aware leveled logger. Callers emit messages at one
//! of seven severities under a namespace; per-namespace thresholds decide what
//! is written, records are formatted into a styled template, handed to an
//! [`OutputSink`], and fanned out to registered [`Handler`]s.
//!
//! # Design
//!
//! - [`Level`] fixes the severity order; a level's rank is its position.
//! - [`ThresholdTable`] maps namespaces to the highest rank they show, falling
//!   back to the `default` entry.
//! - [`ThemeStore`] holds [`StyleTable`]s; the active one supplies the style
//!   slots of each record.
//! - [`Logger`] is a cloneable handle over a shared [`LoggerState`]. It owns
//!   the global mute and timestamp switches, the sink and the handlers.
//! - [`NamespaceView`] pre-fills a namespace and adds a local mute switch.
//!
//! # Invariants
//!
//! - Log calls never fail. Suppressed calls (muted, below threshold, or no
//!   sink for the level's stream) do no formatting and allocate nothing.
//! - A record template contains exactly one style marker per style slot.
//! - Handlers run after the sink write in registration order; a handler that
//!   errors or panics does not stop the others.
//!
//! # Errors
//!
//! Only configuration calls fail, with [`LoggerError::InvalidLevel`] or
//! [`LoggerError::InvalidTheme`]. A failed call changes nothing.
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use logging::{Logger, LoggerConfig, OutputSink, Record};
//!
//! struct Lines(Mutex<Vec<String>>);
//!
//! impl OutputSink for Lines {
//!     fn write(&self, record: &Record<'_>) -> std::io::Result<()> {
//!         self.0.lock().unwrap().push(record.template.to_owned());
//!         Ok(())
//!     }
//! }
//!
//! let lines = Arc::new(Lines(Mutex::new(Vec::new())));
//! let logger = Logger::new(LoggerConfig::default().with_timestamps(false))?
//!     .with_sink(Arc::clone(&lines));
//!
//! logger.warn("svc", "disk almost full");
//! logger.debug("svc", "suppressed at the default threshold");
//!
//! assert_eq!(*lines.0.lock().unwrap(), ["%c(warn) %c[svc]%c : disk almost full"]);
//! # Ok::<(), logging::LoggerError>(())
//! ```

mod config;
mod error;
mod handler;
mod levels;
mod logger;
mod macros;
mod message;
mod sink;
mod state;
pub mod template;
mod theme;
mod thresholds;
pub mod timestamp;
#[cfg(feature = "tracing-bridge")]
mod tracing_bridge;
mod view;

pub use config::{LEVEL_ENV, LoggerConfig, THEME_ENV};
pub use error::{HandlerError, LoggerError};
pub use handler::{Event, Handler, HandlerId, HandlerRegistry};
pub use levels::{Level, LevelSpec, Rank, Stream, rank_of};
pub use logger::{Logger, NO_NAMESPACE};
pub use message::{Argument, Message, SharedError};
pub use self_test::SELF_TEST_NAMESPACE;
pub use sink::{OutputSink, Record};
pub use state::LoggerState;
pub use theme::{
    CUSTOM_THEME, DEFAULT_THEME, LEVEL_SLOTS, Style, StyleKey, StyleTable, ThemeRef, ThemeStore,
    dark, light,
};
pub use thresholds::{ALL_NAMESPACES, DEFAULT_NAMESPACE, ThresholdTable};
#[cfg(feature = "tracing-bridge")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
pub use view::NamespaceView;
