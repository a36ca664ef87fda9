//! Formatting macros that skip work for suppressed records.

/// Logs a formatted message, formatting only if the record would pass.
///
/// ```
/// use logging::{Level, Logger, log_event};
///
/// let logger = Logger::default();
/// let rows = 42;
/// log_event!(logger, Level::Info, "db", "loaded {rows} rows");
/// ```
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $level:expr, $namespace:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        let namespace: &str = $namespace;
        if logger.would_emit(level, namespace) {
            logger.log_named(level, namespace, ::std::format!($($arg)+));
        }
    }};
}
