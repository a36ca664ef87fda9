//! Namespace-bound views over a [`Logger`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::LoggerError;
use crate::levels::{Level, LevelSpec};
use crate::logger::Logger;
use crate::message::{Argument, Message};

/// A [`Logger`] with its namespace pre-filled and a mute switch of its own.
///
/// The view's mute flag only silences calls made through this view. Other
/// views and direct calls on the same namespace are unaffected, while the
/// logger's global mute and the namespace threshold still apply to the view.
///
/// ```
/// use logging::{Level, Logger};
///
/// let logger = Logger::default();
/// let db = logger.wrap("db");
/// db.set_level("silly")?;
/// assert_eq!(logger.resolve_level("db"), Level::Silly.rank());
/// # Ok::<(), logging::LoggerError>(())
/// ```
#[derive(Debug)]
pub struct NamespaceView {
    logger: Logger,
    namespace: Arc<str>,
    muted: AtomicBool,
}

macro_rules! view_level_methods {
    ($($name:ident => $level:ident),* $(,)?) => {
        $(
            #[doc = concat!("Logs `message` at `", stringify!($name), "` under the bound namespace.")]
            pub fn $name<'a>(&self, message: impl Into<Message<'a>>) {
                self.log_args(Level::$level, message, &[]);
            }
        )*
    };
}

impl NamespaceView {
    pub(crate) fn new(logger: Logger, namespace: Arc<str>) -> Self {
        Self {
            logger,
            namespace,
            muted: AtomicBool::new(false),
        }
    }

    /// Returns the bound namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the logger this view delegates to.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Logs at `level` under the bound namespace.
    pub fn log<'a>(&self, level: Level, message: impl Into<Message<'a>>) {
        self.log_args(level, message, &[]);
    }

    /// Logs at `level` under the bound namespace with trailing arguments.
    pub fn log_args<'a>(&self, level: Level, message: impl Into<Message<'a>>, args: &[Argument]) {
        if self.is_muted() {
            return;
        }
        self.logger
            .log_named_args(level, &self.namespace, message, args);
    }

    view_level_methods! {
        critical => Critical,
        error => Error,
        warn => Warn,
        info => Info,
        verbose => Verbose,
        debug => Debug,
        silly => Silly,
    }

    /// Reports whether a call at `level` through this view would be emitted.
    #[must_use]
    pub fn would_emit(&self, level: Level) -> bool {
        !self.is_muted() && self.logger.would_emit(level, &self.namespace)
    }

    /// Sets the shared threshold of the bound namespace.
    pub fn set_level(&self, level: impl Into<LevelSpec>) -> Result<(), LoggerError> {
        self.logger.set_level(&self.namespace, level)
    }

    /// Silences this view.
    pub fn mute(&self) {
        self.muted.store(true, Ordering::Release);
    }

    /// Re-enables this view.
    pub fn unmute(&self) {
        self.muted.store(false, Ordering::Release);
    }

    /// Reports whether this view is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }
}
