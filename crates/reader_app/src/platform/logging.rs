//! Platform logging initialization for the viewer binary.
//!
//! The viewer owns the terminal while it runs, so the default sink is
//! `./reader.log` in the current working directory rather than stdout.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

const LOG_FILENAME: &str = "./reader.log";

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./reader.log in current directory.
    File,
    /// Write to terminal (stderr); only sensible outside raw mode.
    Terminal,
}

/// Initialize the logger. Failure to create the log file degrades to no
/// logging; the viewer keeps running either way.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let result = match destination {
        LogDestination::File => match File::create(Path::new(LOG_FILENAME)) {
            Ok(file) => WriteLogger::init(level, config, file),
            Err(err) => {
                eprintln!("Warning: could not create {LOG_FILENAME}: {err}");
                return;
            }
        },
        LogDestination::Terminal => TermLogger::init(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    // Ignore the error if a logger was already installed.
    let _ = result;
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
