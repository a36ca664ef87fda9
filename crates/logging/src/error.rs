//! Configuration errors raised by threshold and theme operations.

use thiserror::Error;

/// Errors returned by configuration calls.
///
/// Log calls never produce these; they are only surfaced to the caller that
/// attempted the misconfiguration.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LoggerError {
    /// A level name that is not part of the severity ordering.
    #[error("invalid level: {0}")]
    InvalidLevel(String),
    /// A theme name that is not registered with the theme store.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),
}

impl LoggerError {
    pub(crate) fn invalid_level(name: impl Into<String>) -> Self {
        Self::InvalidLevel(name.into())
    }

    pub(crate) fn invalid_theme(name: impl Into<String>) -> Self {
        Self::InvalidTheme(name.into())
    }
}

/// Error type handlers may return to report a failed notification.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
