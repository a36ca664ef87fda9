//! crates/logging/src/logger.rs
//! The public logging handle.

use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::error::{HandlerError, LoggerError};
use crate::handler::{Event, Handler, HandlerId};
use crate::levels::{Level, LevelSpec, Rank};
use crate::message::{Argument, Message};
use crate::sink::OutputSink;
use crate::state::LoggerState;
use crate::theme::{StyleTable, ThemeRef};
use crate::thresholds::ThresholdTable;
use crate::view::NamespaceView;

/// Namespace used by the call shapes that take no namespace.
pub const NO_NAMESPACE: &str = "none";

/// Cheaply cloneable handle to a shared [`LoggerState`].
///
/// Every clone, and every [`NamespaceView`] created from it, observes the same
/// thresholds, theme, switches, sink and handlers.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, LoggerConfig};
///
/// let logger = Logger::new(LoggerConfig::default().with_default_level("warn"))?;
/// assert!(logger.would_emit(Level::Warn, "svc"));
/// assert!(!logger.would_emit(Level::Info, "svc"));
///
/// logger.set_level("svc", "debug")?;
/// assert!(logger.would_emit(Level::Debug, "svc"));
/// # Ok::<(), logging::LoggerError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Logger {
    state: Arc<LoggerState>,
}

macro_rules! level_methods {
    ($($name:ident => $level:ident),* $(,)?) => {
        $(
            #[doc = concat!("Logs `message` at `", stringify!($name), "` under `namespace`.")]
            pub fn $name<'a>(&self, namespace: &str, message: impl Into<Message<'a>>) {
                self.log_named(Level::$level, namespace, message);
            }
        )*
    };
}

impl Logger {
    /// Creates a logger without a sink.
    ///
    /// Until [`set_sink`](Self::set_sink) is called every record is suppressed,
    /// handlers included.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        LoggerState::init(&config).map(|state| Self {
            state: Arc::new(state),
        })
    }

    /// Creates a logger configured from `LOG_LEVEL` and `LOG_THEME`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LoggerConfig::from_env()).unwrap_or_default()
    }

    /// Installs `sink` and returns the logger.
    #[must_use]
    pub fn with_sink(self, sink: impl OutputSink + 'static) -> Self {
        self.set_sink(sink);
        self
    }

    /// Logs under [`NO_NAMESPACE`].
    pub fn log<'a>(&self, level: Level, message: impl Into<Message<'a>>) {
        self.log_named_args(level, NO_NAMESPACE, message, &[]);
    }

    /// Logs under [`NO_NAMESPACE`] with trailing arguments.
    pub fn log_args<'a>(&self, level: Level, message: impl Into<Message<'a>>, args: &[Argument]) {
        self.log_named_args(level, NO_NAMESPACE, message, args);
    }

    /// Logs under `namespace`.
    pub fn log_named<'a>(&self, level: Level, namespace: &str, message: impl Into<Message<'a>>) {
        self.log_named_args(level, namespace, message, &[]);
    }

    /// Logs under `namespace` with trailing arguments.
    ///
    /// Never fails: a muted logger, a threshold below `level`, or a missing
    /// sink all suppress the call silently.
    pub fn log_named_args<'a>(
        &self,
        level: Level,
        namespace: &str,
        message: impl Into<Message<'a>>,
        args: &[Argument],
    ) {
        self.state.emit(level, namespace, &message.into(), args);
    }

    level_methods! {
        critical => Critical,
        error => Error,
        warn => Warn,
        info => Info,
        verbose => Verbose,
        debug => Debug,
        silly => Silly,
    }

    /// Reports whether a record at `level` under `namespace` would pass the
    /// mute switch and threshold.
    #[must_use]
    pub fn would_emit(&self, level: Level, namespace: &str) -> bool {
        self.state.passes(level, namespace)
    }

    /// Sets the threshold of `namespace`; `"*"` overwrites every known namespace.
    pub fn set_level(&self, namespace: &str, level: impl Into<LevelSpec>) -> Result<(), LoggerError> {
        let level = level.into();
        self.state.thresholds_mut().set(namespace, &level)?;
        tracing::trace!(target: "logging::config", namespace, %level, "threshold set");
        Ok(())
    }

    /// Sets several thresholds in order.
    ///
    /// A bad level leaves every threshold unchanged, including entries that
    /// precede it in `mapping`. This is stricter than calling
    /// [`set_level`](Self::set_level) once per entry, which would keep the
    /// entries applied before the failure.
    pub fn set_levels<I, N, L>(&self, mapping: I) -> Result<(), LoggerError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: Into<LevelSpec>,
    {
        let namespaces = {
            let mut thresholds = self.state.thresholds_mut();
            thresholds.set_many(mapping)?;
            thresholds.len()
        };
        tracing::trace!(target: "logging::config", namespaces, "thresholds set");
        Ok(())
    }

    /// Returns the threshold that applies to `namespace`.
    #[must_use]
    pub fn resolve_level(&self, namespace: &str) -> Rank {
        self.state.thresholds().resolve(namespace)
    }

    /// Returns a copy of the threshold table.
    #[must_use]
    pub fn thresholds(&self) -> ThresholdTable {
        self.state.thresholds().clone()
    }

    /// Registers a handler; handlers run in registration order.
    pub fn add_handler(&self, handler: impl Handler + 'static) -> HandlerId {
        let id = self.state.handlers_mut().register(Arc::new(handler));
        tracing::trace!(target: "logging::config", ?id, "handler added");
        id
    }

    /// Registers a closure handler.
    pub fn add_handler_fn<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&Event<'_>) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.add_handler(handler)
    }

    /// Removes a handler. Returns `false` if it was not registered.
    pub fn remove_handler(&self, id: HandlerId) -> bool {
        let removed = self.state.handlers_mut().remove(id);
        tracing::trace!(target: "logging::config", ?id, removed, "handler removed");
        removed
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.state.handlers().len()
    }

    /// Suppresses every record until [`unmute`](Self::unmute).
    pub fn mute(&self) {
        self.state.set_muted(true);
        tracing::trace!(target: "logging::config", "muted");
    }

    /// Restores normal filtering.
    pub fn unmute(&self) {
        self.state.set_muted(false);
        tracing::trace!(target: "logging::config", "unmuted");
    }

    /// Reports whether the global mute switch is set.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.state.is_muted()
    }

    /// Prefixes records with a timestamp.
    pub fn enable_timestamps(&self) {
        self.state.set_timestamps(true);
        tracing::trace!(target: "logging::config", timestamps = true, "timestamp prefix toggled");
    }

    /// Drops the timestamp prefix.
    pub fn disable_timestamps(&self) {
        self.state.set_timestamps(false);
        tracing::trace!(target: "logging::config", timestamps = false, "timestamp prefix toggled");
    }

    /// Reports whether records carry timestamps.
    #[must_use]
    pub fn timestamps_enabled(&self) -> bool {
        self.state.timestamps()
    }

    /// Returns a view bound to `namespace`.
    #[must_use]
    pub fn wrap(&self, namespace: impl Into<Arc<str>>) -> NamespaceView {
        NamespaceView::new(self.clone(), namespace.into())
    }

    /// Activates a theme by name or installs an inline table as `custom`.
    pub fn set_theme(&self, theme: impl Into<ThemeRef>) -> Result<(), LoggerError> {
        let active = {
            let mut themes = self.state.themes_mut();
            themes.select(theme.into())?;
            themes.active_name().to_owned()
        };
        tracing::trace!(target: "logging::config", theme = %active, "theme selected");
        Ok(())
    }

    /// Adds or replaces a named theme without activating it.
    pub fn register_theme(&self, name: impl Into<String>, table: StyleTable) {
        let name = name.into();
        tracing::trace!(target: "logging::config", theme = %name, "theme registered");
        self.state.themes_mut().register(name, table);
    }

    /// Returns the active theme's name.
    #[must_use]
    pub fn active_theme(&self) -> String {
        self.state.themes().active_name().to_owned()
    }

    /// Returns the registered theme names, sorted.
    #[must_use]
    pub fn theme_names(&self) -> Vec<String> {
        self.state.themes().names()
    }

    /// Replaces the sink, returning the previous one.
    pub fn set_sink(&self, sink: impl OutputSink + 'static) -> Option<Arc<dyn OutputSink>> {
        tracing::trace!(target: "logging::config", "sink installed");
        self.state.replace_sink(Some(Arc::new(sink)))
    }

    /// Removes the sink; subsequent records are suppressed.
    pub fn clear_sink(&self) -> Option<Arc<dyn OutputSink>> {
        tracing::trace!(target: "logging::config", "sink cleared");
        self.state.replace_sink(None)
    }

    /// Reports whether a sink is installed.
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.state.sink().is_some()
    }

    pub(crate) fn state(&self) -> &LoggerState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logger_has_no_sink() {
        let logger = Logger::default();
        assert!(!logger.has_sink());
        assert_eq!(logger.resolve_level("x"), Level::Info.rank());
        assert_eq!(logger.active_theme(), "light");
        assert!(logger.timestamps_enabled());
    }

    #[test]
    fn clones_share_state() {
        let logger = Logger::default();
        let other = logger.clone();
        other.set_level("db", Level::Silly).unwrap();
        other.mute();
        assert_eq!(logger.resolve_level("db"), 6);
        assert!(logger.is_muted());
    }

    #[test]
    fn failed_theme_change_keeps_active_theme() {
        let logger = Logger::default();
        logger.set_theme("dark").unwrap();
        assert!(logger.set_theme("not-a-theme").is_err());
        assert_eq!(logger.active_theme(), "dark");
    }

    #[test]
    fn timestamp_switch_toggles() {
        let logger = Logger::default();
        logger.disable_timestamps();
        assert!(!logger.timestamps_enabled());
        logger.enable_timestamps();
        assert!(logger.timestamps_enabled());
    }

    #[test]
    fn registered_theme_is_selectable() {
        let logger = Logger::default();
        logger.register_theme("plain", StyleTable::new());
        assert_eq!(logger.theme_names(), ["dark", "light", "plain"]);
        logger.set_theme("plain").unwrap();
        assert_eq!(logger.active_theme(), "plain");
    }
}
