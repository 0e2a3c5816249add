use crate::types::LogLevel;
use clap::ValueEnum;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Environment variable that overrides `--log-level`
pub const LOG_ENV: &str = "MINDBRIDGE_LOG";

/// Log to stderr so stdout stays clean for table and JSON output.
pub fn init(level: LogLevel) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| LogLevel::from_str(value.trim(), true).ok())
        .unwrap_or(level);

    // A second init (e.g. in tests) keeps the first logger
    let _ = TermLogger::init(
        level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
