//! Recording sink and handler shared by the integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use logging::{Event, Level, Logger, LoggerConfig, OutputSink, Record, Stream};

/// One record as seen by the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub level: Level,
    pub stream: Stream,
    pub namespace: String,
    pub template: String,
    pub styles: Vec<String>,
    pub args: Vec<String>,
    pub leading_error: Option<String>,
}

/// One event as seen by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seen {
    pub level: &'static str,
    pub namespace: String,
    pub message: String,
    pub args: Vec<String>,
}

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Written>>,
    rejected: Vec<Stream>,
}

impl RecordingSink {
    pub fn rejecting(rejected: Vec<Stream>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            rejected,
        }
    }

    pub fn records(&self) -> Vec<Written> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl OutputSink for RecordingSink {
    fn accepts(&self, stream: Stream) -> bool {
        !self.rejected.contains(&stream)
    }

    fn write(&self, record: &Record<'_>) -> io::Result<()> {
        self.records.lock().unwrap().push(Written {
            level: record.level,
            stream: record.stream,
            namespace: record.namespace.to_owned(),
            template: record.template.to_owned(),
            styles: record.styles.iter().map(ToString::to_string).collect(),
            args: record.args.iter().map(ToString::to_string).collect(),
            leading_error: record
                .args
                .first()
                .and_then(|arg| arg.as_error())
                .map(ToString::to_string),
        });
        Ok(())
    }
}

/// A sink whose writer always fails, counting the attempts.
#[derive(Default)]
pub struct FailingSink {
    attempts: Mutex<usize>,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl OutputSink for FailingSink {
    fn write(&self, _record: &Record<'_>) -> io::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(io::Error::other("device unplugged"))
    }
}

pub type SeenLog = Arc<Mutex<Vec<Seen>>>;

/// Registers a handler that records every event.
pub fn record_events(logger: &Logger) -> SeenLog {
    let seen: SeenLog = Arc::default();
    let log = Arc::clone(&seen);
    logger.add_handler_fn(move |event: &Event<'_>| {
        log.lock().unwrap().push(Seen {
            level: event.level_name(),
            namespace: event.namespace.to_owned(),
            message: event.message.to_owned(),
            args: event.args.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    });
    seen
}

/// A logger without timestamps writing to a fresh recording sink.
pub fn recording_logger(default_level: &str) -> (Logger, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(
        LoggerConfig::default()
            .with_default_level(default_level)
            .with_timestamps(false),
    )
    .expect("valid config")
    .with_sink(Arc::clone(&sink));
    (logger, sink)
}
