//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a [`Logger`].
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer that forwards every event
//! to a [`Logger`], using the event target as namespace. Filtering then
//! happens through the logger's thresholds like any other call.
//!
//! ```rust,ignore
//! use logging::{Logger, init_tracing};
//!
//! let logger = Logger::from_env();
//! init_tracing(logger.clone());
//!
//! tracing::warn!(target: "db", "pool exhausted");
//! ```

use std::fmt::{self, Write as _};

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::Level;
use crate::logger::Logger;
use crate::message::Argument;

/// Targets with this prefix are the logger's own diagnostics and are not forwarded.
const INTERNAL_TARGET_PREFIX: &str = "logging";

/// A tracing layer that re-emits events through a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Maps a tracing level onto a logger level.
    #[must_use]
    pub const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Silly,
        }
    }

    fn is_internal(target: &str) -> bool {
        target == INTERNAL_TARGET_PREFIX
            || target
                .strip_prefix(INTERNAL_TARGET_PREFIX)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if Self::is_internal(target) {
            return;
        }
        let level = Self::map_level(metadata.level());
        if !self.logger.would_emit(level, target) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let args: Vec<Argument> = visitor.fields.into_iter().map(Argument::Text).collect();
        self.logger
            .log_named_args(level, target, visitor.message.unwrap_or_default(), &args);
    }
}

/// Collects the `message` field and renders the rest as `name=value`.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            let mut rendered = String::new();
            let _ = write!(rendered, "{}={value:?}", field.name());
            self.fields.push(rendered);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that forwards every event to `logger`.
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}
