//! crates/logging/src/state.rs
//! Shared logger state and the emission path.
//!
//! A [`LoggerState`] is created once by [`Logger::new`](crate::Logger::new)
//! and shared through `Arc` by every [`Logger`](crate::Logger) clone and
//! [`NamespaceView`](crate::NamespaceView). It needs no teardown.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::handler::{Event, HandlerRegistry};
use crate::levels::{Level, rank_of};
use crate::message::{self, Argument, Message};
use crate::sink::{OutputSink, Record};
use crate::template;
use crate::theme::ThemeStore;
use crate::thresholds::ThresholdTable;
use crate::timestamp;

/// Process-wide configuration and observers behind a [`Logger`](crate::Logger).
///
/// Locks are held only for the read or update itself and never while the
/// sink or a handler runs, so both may call back into the logger.
pub struct LoggerState {
    thresholds: RwLock<ThresholdTable>,
    themes: RwLock<ThemeStore>,
    handlers: RwLock<HandlerRegistry>,
    sink: RwLock<Option<Arc<dyn OutputSink>>>,
    muted: AtomicBool,
    timestamps: AtomicBool,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poison| poison.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poison| poison.into_inner())
}

impl LoggerState {
    /// Builds the state from `config`.
    ///
    /// Fails when the default level or the theme name is unknown.
    pub fn init(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let default = rank_of(&config.default_level)?;
        let mut themes = ThemeStore::new();
        themes.select(config.theme.as_str().into())?;

        Ok(Self {
            thresholds: RwLock::new(ThresholdTable::new(default)),
            themes: RwLock::new(themes),
            handlers: RwLock::new(HandlerRegistry::new()),
            sink: RwLock::new(None),
            muted: AtomicBool::new(false),
            timestamps: AtomicBool::new(config.timestamps),
        })
    }

    pub(crate) fn thresholds(&self) -> RwLockReadGuard<'_, ThresholdTable> {
        read(&self.thresholds)
    }

    pub(crate) fn thresholds_mut(&self) -> RwLockWriteGuard<'_, ThresholdTable> {
        write(&self.thresholds)
    }

    pub(crate) fn themes(&self) -> RwLockReadGuard<'_, ThemeStore> {
        read(&self.themes)
    }

    pub(crate) fn themes_mut(&self) -> RwLockWriteGuard<'_, ThemeStore> {
        write(&self.themes)
    }

    pub(crate) fn handlers(&self) -> RwLockReadGuard<'_, HandlerRegistry> {
        read(&self.handlers)
    }

    pub(crate) fn handlers_mut(&self) -> RwLockWriteGuard<'_, HandlerRegistry> {
        write(&self.handlers)
    }

    pub(crate) fn sink(&self) -> Option<Arc<dyn OutputSink>> {
        read(&self.sink).clone()
    }

    pub(crate) fn replace_sink(
        &self,
        sink: Option<Arc<dyn OutputSink>>,
    ) -> Option<Arc<dyn OutputSink>> {
        std::mem::replace(&mut *write(&self.sink), sink)
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Release);
    }

    pub(crate) fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    pub(crate) fn set_timestamps(&self, enabled: bool) {
        self.timestamps.store(enabled, Ordering::Release);
    }

    pub(crate) fn timestamps(&self) -> bool {
        self.timestamps.load(Ordering::Acquire)
    }

    /// Reports whether the mute switch and threshold let `level` through for `namespace`.
    pub(crate) fn passes(&self, level: Level, namespace: &str) -> bool {
        !self.is_muted() && self.thresholds().should_emit(namespace, level.rank())
    }

    /// Formats, writes, and fans out one record.
    ///
    /// Returns `false` when the record was suppressed. Nothing is allocated
    /// before every suppression check has passed.
    pub(crate) fn emit(
        &self,
        level: Level,
        namespace: &str,
        message: &Message<'_>,
        args: &[Argument],
    ) -> bool {
        if !self.passes(level, namespace) {
            return false;
        }
        let Some(sink) = self.sink() else {
            return false;
        };
        let stream = level.stream();
        if !sink.accepts(stream) {
            return false;
        }

        let with_time = self.timestamps();
        let stamp = with_time.then(timestamp::now);
        let (body, args) = message::normalize(message, args);
        let template = template::compose(stamp.as_deref(), level, namespace, body);
        let styles = self.themes().slots_for(level, with_time);

        let record = Record {
            level,
            stream,
            namespace,
            template: &template,
            styles: &styles,
            args: &args,
        };
        if let Err(error) = sink.write(&record) {
            tracing::debug!(
                target: "logging::dispatch",
                %error,
                level = level.name(),
                namespace,
                "sink write failed"
            );
        }

        self.notify(&Event {
            level,
            namespace,
            message: body,
            args: &args,
        });
        true
    }

    fn notify(&self, event: &Event<'_>) {
        let handlers = self.handlers().snapshot();
        for (id, handler) in handlers {
            match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event))) {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::warn!(target: "logging::dispatch", handler = %id, %error, "handler failed");
                }
                Err(_) => {
                    tracing::warn!(target: "logging::dispatch", handler = %id, "handler panicked");
                }
            }
        }
    }
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            thresholds: RwLock::new(ThresholdTable::default()),
            themes: RwLock::new(ThemeStore::new()),
            handlers: RwLock::new(HandlerRegistry::new()),
            sink: RwLock::new(None),
            muted: AtomicBool::new(false),
            timestamps: AtomicBool::new(true),
        }
    }
}

impl fmt::Debug for LoggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerState")
            .field("thresholds", &*self.thresholds())
            .field("theme", &self.themes().active_name())
            .field("handlers", &*self.handlers())
            .field("has_sink", &read(&self.sink).is_some())
            .field("muted", &self.is_muted())
            .field("timestamps", &self.timestamps())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_rejects_unknown_level() {
        let config = LoggerConfig::default().with_default_level("loud");
        assert_eq!(
            LoggerState::init(&config).unwrap_err(),
            LoggerError::InvalidLevel("loud".to_owned())
        );
    }

    #[test]
    fn init_rejects_unknown_theme() {
        let config = LoggerConfig::default().with_theme("neon");
        assert_eq!(
            LoggerState::init(&config).unwrap_err(),
            LoggerError::InvalidTheme("neon".to_owned())
        );
    }

    #[test]
    fn init_applies_config() {
        let config = LoggerConfig::default()
            .with_default_level("warn")
            .with_theme("dark")
            .with_timestamps(false);
        let state = LoggerState::init(&config).unwrap();
        assert_eq!(state.thresholds().default_rank(), 2);
        assert_eq!(state.themes().active_name(), "dark");
        assert!(!state.timestamps());
        assert!(!state.is_muted());
    }

    #[test]
    fn emit_without_sink_is_suppressed() {
        let state = LoggerState::default();
        assert!(!state.emit(Level::Error, "ns", &"boom".into(), &[]));
    }

    #[test]
    fn debug_output_lists_switches() {
        let rendered = format!("{:?}", LoggerState::default());
        assert!(rendered.contains("muted: false"));
        assert!(rendered.contains("has_sink: false"));
    }
}
