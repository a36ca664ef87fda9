//! crates/logging-sink/src/writer.rs
//! A sink over any [`std::io::Write`] implementor.

use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::sync::{Mutex, MutexGuard};

use logging::{OutputSink, Record, Stream};

use crate::color::ColorMode;
use crate::line_mode::LineMode;
use crate::render::render_record;

/// Renders every record into one writer.
///
/// The writer sits behind a mutex so the sink can be shared by every clone of
/// a [`Logger`](logging::Logger). Each record is rendered into a buffer first
/// and handed to the writer with a single `write_all`, so concurrent records
/// never interleave.
///
/// A writer has no terminal to probe, so [`ColorMode::Auto`] behaves like
/// [`ColorMode::Never`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, LoggerConfig};
/// use logging_sink::WriterSink;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = Logger::new(LoggerConfig::default().with_timestamps(false))?
///     .with_sink(Arc::clone(&sink));
///
/// logger.warn("svc", "disk almost full");
/// assert_eq!(sink.contents(), b"(warn) [svc] : disk almost full\n");
/// # Ok::<(), logging::LoggerError>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
    colored: bool,
    streams: Option<Vec<Stream>>,
}

impl<W> WriterSink<W> {
    /// Creates a sink writing uncoloured lines.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
            colored: false,
            streams: None,
        }
    }

    /// Selects whether escape sequences are written.
    #[must_use]
    pub fn with_color(mut self, mode: ColorMode) -> Self {
        self.colored = mode.enabled_for(false);
        self
    }

    /// Restricts the sink to `streams`; records for other streams are dropped
    /// before formatting.
    #[must_use]
    pub fn only_streams(mut self, streams: impl IntoIterator<Item = Stream>) -> Self {
        self.streams = Some(streams.into_iter().collect());
        self
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Reports whether escape sequences are written.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        self.colored
    }

    /// Swaps in a new writer and returns the previous one.
    #[must_use = "the returned writer holds the output written so far"]
    pub fn replace_writer(&self, writer: W) -> W {
        mem::replace(&mut *self.lock(), writer)
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W: Clone> WriterSink<W> {
    /// Returns a copy of the writer, typically a `Vec<u8>` in tests.
    #[must_use]
    pub fn contents(&self) -> W {
        self.lock().clone()
    }
}

impl<W: Write> WriterSink<W> {
    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn accepts(&self, stream: Stream) -> bool {
        self.streams
            .as_ref()
            .is_none_or(|streams| streams.contains(&stream))
    }

    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = String::with_capacity(record.template.len() + 16);
        render_record(record, self.colored, &mut line);
        if self.line_mode.append_newline() {
            line.push('\n');
        }
        self.lock().write_all(line.as_bytes())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &*self.lock())
            .field("line_mode", &self.line_mode)
            .field("colored", &self.colored)
            .field("streams", &self.streams)
            .finish()
    }
}

impl<W: Default> Default for WriterSink<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}
