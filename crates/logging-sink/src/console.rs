//! crates/logging-sink/src/console.rs
//! Sink for the process's standard streams.

use std::io::{self, IsTerminal, Write};

use logging::{OutputSink, Record, Stream};

use crate::color::ColorMode;
use crate::line_mode::LineMode;
use crate::render::render_record;

/// Standard stream a [`Stream`] is written to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsoleTarget {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl ConsoleTarget {
    /// Diagnostic streams (`error`, `warn`) go to stderr; the rest to stdout.
    #[must_use]
    pub const fn for_stream(stream: Stream) -> Self {
        if stream.is_diagnostic() {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }
}

/// Writes records to stdout and stderr.
///
/// Colour is decided once per target at construction: under
/// [`ColorMode::Auto`] a target is coloured only if it is a terminal.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    stdout_colored: bool,
    stderr_colored: bool,
    line_mode: LineMode,
}

impl ConsoleSink {
    /// Creates a sink using [`ColorMode::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(ColorMode::Auto)
    }

    /// Creates a sink with an explicit colour mode.
    #[must_use]
    pub fn with_color(mode: ColorMode) -> Self {
        let stdout_colored = mode.enabled_for(io::stdout().is_terminal());
        let stderr_colored = mode.enabled_for(io::stderr().is_terminal());
        tracing::trace!(
            target: "logging::sink",
            %mode,
            stdout_colored,
            stderr_colored,
            "console colour resolved"
        );
        Self {
            stdout_colored,
            stderr_colored,
            line_mode: LineMode::WithNewline,
        }
    }

    /// Sets the [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Reports whether records routed to `target` are coloured.
    #[must_use]
    pub const fn is_colored(&self, target: ConsoleTarget) -> bool {
        match target {
            ConsoleTarget::Stdout => self.stdout_colored,
            ConsoleTarget::Stderr => self.stderr_colored,
        }
    }

    fn render(&self, record: &Record<'_>, target: ConsoleTarget) -> String {
        let mut line = String::with_capacity(record.template.len() + 16);
        render_record(record, self.is_colored(target), &mut line);
        if self.line_mode.append_newline() {
            line.push('\n');
        }
        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        let target = ConsoleTarget::for_stream(record.stream);
        let line = self.render(record, target);
        match target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            ConsoleTarget::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{Level, Style};

    #[test]
    fn routing_follows_stream() {
        assert_eq!(ConsoleTarget::for_stream(Stream::Error), ConsoleTarget::Stderr);
        assert_eq!(ConsoleTarget::for_stream(Stream::Warn), ConsoleTarget::Stderr);
        for stream in [Stream::Info, Stream::Log, Stream::Debug] {
            assert_eq!(ConsoleTarget::for_stream(stream), ConsoleTarget::Stdout);
        }
    }

    #[test]
    fn explicit_modes_ignore_terminal() {
        let never = ConsoleSink::with_color(ColorMode::Never);
        assert!(!never.is_colored(ConsoleTarget::Stdout));
        assert!(!never.is_colored(ConsoleTarget::Stderr));

        let always = ConsoleSink::with_color(ColorMode::Always);
        assert!(always.is_colored(ConsoleTarget::Stdout));
        assert!(always.is_colored(ConsoleTarget::Stderr));
    }

    #[test]
    fn render_uses_target_colour() {
        let sink = ConsoleSink::with_color(ColorMode::Never).with_line_mode(LineMode::WithoutNewline);
        let styles = [Style::new("color: #F00")];
        let record = Record {
            level: Level::Error,
            stream: Stream::Error,
            namespace: "svc",
            template: "%cboom",
            styles: &styles,
            args: &[],
        };
        assert_eq!(sink.render(&record, ConsoleTarget::Stderr), "boom");
    }

    #[test]
    fn accepts_every_stream() {
        let sink = ConsoleSink::with_color(ColorMode::Never);
        assert!(sink.accepts(Stream::Debug));
        assert!(sink.accepts(Stream::Error));
    }
}
