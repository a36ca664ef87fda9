//! crates/logging/src/handler.rs
//! Observers notified of every emitted record.

use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::levels::Level;
use crate::message::Argument;

/// Raw event passed to handlers after the sink write.
#[derive(Clone, Copy, Debug)]
pub struct Event<'a> {
    /// Level of the record.
    pub level: Level,
    /// Namespace after normalization.
    pub namespace: &'a str,
    /// Message body; empty when the message was an error.
    pub message: &'a str,
    /// Trailing arguments, message error first.
    pub args: &'a [Argument],
}

impl Event<'_> {
    /// Returns the level name.
    #[must_use]
    pub const fn level_name(&self) -> &'static str {
        self.level.name()
    }
}

/// An observer of emitted records.
///
/// Closures `Fn(&Event<'_>) -> Result<(), HandlerError>` implement this trait.
pub trait Handler: Send + Sync {
    /// Receives one event. Errors are reported and otherwise ignored.
    fn handle(&self, event: &Event<'_>) -> Result<(), HandlerError>;
}

impl<F> Handler for F
where
    F: Fn(&Event<'_>) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &Event<'_>) -> Result<(), HandlerError> {
        self(event)
    }
}

/// Identifier returned by registration, used for removal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.0)
    }
}

/// Ordered handler list.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<(HandlerId, Arc<dyn Handler>)>,
    next_id: u64,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; it runs after every handler registered before it.
    pub fn register(&mut self, handler: Arc<dyn Handler>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Removes a handler, keeping the order of the others.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Copies the current handlers in invocation order.
    ///
    /// Dispatch iterates the snapshot so handlers can register or remove
    /// handlers without deadlocking.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(HandlerId, Arc<dyn Handler>)> {
        self.handlers.clone()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Reports whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field(
                "handlers",
                &self.handlers.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Arc<dyn Handler> {
        Arc::new(|_: &Event<'_>| -> Result<(), HandlerError> { Ok(()) })
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut registry = HandlerRegistry::new();
        let first = registry.register(noop());
        let second = registry.register(noop());
        assert!(first < second);
        let order: Vec<_> = registry.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, [first, second]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut registry = HandlerRegistry::new();
        let a = registry.register(noop());
        let b = registry.register(noop());
        let c = registry.register(noop());

        assert!(registry.remove(b));
        assert!(!registry.remove(b));
        let order: Vec<_> = registry.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, [a, c]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut registry = HandlerRegistry::new();
        let a = registry.register(noop());
        registry.remove(a);
        let b = registry.register(noop());
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "handler#1");
    }

    #[test]
    fn event_exposes_level_name() {
        let event = Event {
            level: Level::Verbose,
            namespace: "ns",
            message: "m",
            args: &[],
        };
        assert_eq!(event.level_name(), "verbose");
    }
}
