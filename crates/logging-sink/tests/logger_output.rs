use std::sync::Arc;

use logging::{Argument, Level, Logger, LoggerConfig, Message, Stream};
use logging_sink::{ColorMode, LineMode, WriterSink};

#[derive(Debug, thiserror::Error)]
#[error("connection reset")]
struct ResetError;

fn logger_with(sink: &Arc<WriterSink<Vec<u8>>>, level: &str) -> Logger {
    Logger::new(
        LoggerConfig::default()
            .with_default_level(level)
            .with_timestamps(false),
    )
    .unwrap()
    .with_sink(Arc::clone(sink))
}

fn lines(sink: &WriterSink<Vec<u8>>) -> Vec<String> {
    String::from_utf8(sink.contents())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn plain_lines_for_every_call_shape() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = logger_with(&sink, "silly");

    logger.log(Level::Info, "no namespace");
    logger.verbose("svc", "named");
    logger.wrap("view").debug("wrapped");
    logger.log_named_args(
        Level::Error,
        "net",
        Message::error(ResetError),
        &[Argument::from("peer=10.0.0.2")],
    );

    assert_eq!(
        lines(&sink),
        [
            "(info) [none] : no namespace",
            "(verbose) [svc] : named",
            "(debug) [view] : wrapped",
            "(error) [net] :  connection reset peer=10.0.0.2",
        ]
    );
}

#[test]
fn percent_signs_survive_rendering() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = logger_with(&sink, "info");

    logger.info("disk", "95% full, %c is not a marker");
    assert_eq!(lines(&sink), ["(info) [disk] : 95% full, %c is not a marker"]);
}

#[test]
fn timestamps_prefix_each_line() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = logger_with(&sink, "info");
    logger.enable_timestamps();

    logger.info("svc", "tick");
    let line = &lines(&sink)[0];
    let (stamp, rest) = line.split_once(" - ").unwrap();
    assert!(stamp.contains(" @ "), "{stamp}");
    assert_eq!(rest, "(info) [svc] : tick");
}

#[test]
fn colored_output_hides_label_and_styles_namespace() {
    let sink = Arc::new(WriterSink::new(Vec::new()).with_color(ColorMode::Always));
    let logger = logger_with(&sink, "info");

    logger.warn("svc", "careful");
    let output = String::from_utf8(sink.contents()).unwrap();
    assert_eq!(
        output,
        "\x1b[38;2;253;147;39m[svc]\x1b[0m\x1b[38;2;253;147;39m : careful\x1b[0m\n"
    );
}

#[test]
fn stream_filter_suppresses_before_formatting() {
    let sink = Arc::new(WriterSink::new(Vec::new()).only_streams([Stream::Error, Stream::Warn]));
    let logger = logger_with(&sink, "silly");

    logger.info("svc", "dropped");
    logger.critical("svc", "kept");
    assert_eq!(lines(&sink), ["(critical) [svc] : kept"]);
}

#[test]
fn self_test_writes_seven_lines() {
    let sink = Arc::new(WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline));
    let logger = logger_with(&sink, "error");

    assert_eq!(logger.run_self_test(), 7);
    let lines = lines(&sink);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], "(error) [test] :  There was an error");
    assert!(lines.iter().all(|line| line.contains("[test]")));
    assert_eq!(logger.resolve_level("test"), Level::Error.rank());
}
