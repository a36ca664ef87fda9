#![deny(unsafe_code)]

//! Prints one sample record per level through the console sink.
//!
//! Usage: `nslog-selftest [auto|always|never]`. `LOG_THEME` picks the theme;
//! `NSLOG_TRACE` enables the logger's own diagnostics on stderr, using
//! `tracing-subscriber` filter syntax.

use std::{env, io, process::ExitCode};

use nslog::sink::ColorMode;
use nslog::{Level, LoggerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("NSLOG_TRACE"))
        .with_writer(io::stderr)
        .init();

    let color = match env::args().nth(1).map(|arg| arg.parse::<ColorMode>()) {
        None => ColorMode::Auto,
        Some(Ok(mode)) => mode,
        Some(Err(error)) => {
            eprintln!("nslog-selftest: {error}");
            return ExitCode::from(2);
        }
    };

    let logger = match nslog::console_logger_with(LoggerConfig::from_env(), color) {
        Ok(logger) => logger,
        Err(error) => {
            eprintln!("nslog-selftest: {error}");
            return ExitCode::FAILURE;
        }
    };

    if logger.run_self_test() == Level::COUNT {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
