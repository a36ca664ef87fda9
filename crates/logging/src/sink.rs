//! The output sink boundary.
//!
//! The logger hands every emitted record to a single [`OutputSink`]. Concrete
//! sinks live in the `logging-sink` crate.

use std::io;

use crate::levels::{Level, Stream};
use crate::message::Argument;
use crate::theme::Style;

/// One formatted record handed to a sink.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    /// Level the record was logged at.
    pub level: Level,
    /// Stream the level routes to.
    pub stream: Stream,
    /// Namespace after normalization.
    pub namespace: &'a str,
    /// Template built by [`template::compose`](crate::template::compose).
    pub template: &'a str,
    /// One style per template marker, in marker order.
    pub styles: &'a [Style],
    /// Trailing arguments; a message error, if any, comes first.
    pub args: &'a [Argument],
}

/// A styled-text writer routed by [`Stream`].
pub trait OutputSink: Send + Sync {
    /// Reports whether records for `stream` can be written.
    ///
    /// Records for a stream the sink does not accept are dropped before any
    /// formatting happens.
    fn accepts(&self, stream: Stream) -> bool {
        let _ = stream;
        true
    }

    /// Writes one record.
    fn write(&self, record: &Record<'_>) -> io::Result<()>;
}

impl<S> OutputSink for std::sync::Arc<S>
where
    S: OutputSink + ?Sized,
{
    fn accepts(&self, stream: Stream) -> bool {
        (**self).accepts(stream)
    }

    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        (**self).write(record)
    }
}
