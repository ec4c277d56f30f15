//! Logger setup.
//!
//! All log output goes to stderr; stdout carries only the JSON report.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs the global `env_logger` for the CLI.
///
/// `RUST_LOG` is read first and `level` then overrides it, so
/// `--log-level` always wins. Chatty dependencies (rustls, hickory) are held
/// at warn or above regardless of `level`.
///
/// ```bash
/// RUST_LOG=debug lead_assess validate-domain acme.com --log-level warn
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a global logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("rustls", LevelFilter::Warn)
        // Truncated UDP answers are retried over TCP; their warnings are noise here
        .filter_module("hickory_proto", LevelFilter::Error)
        .filter_module("hickory_resolver", LevelFilter::Warn)
        .filter_module("lead_assess", level)
        .target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                )
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                plain_line(record.level(), record.target(), &record.args().to_string())
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// `{"ts":..,"level":..,"target":..,"msg":..}`
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

/// `<marker> <target> [LEVEL] <msg>`, colored per level.
fn plain_line(level: Level, target: &str, msg: &str) -> String {
    let (marker, label) = match level {
        Level::Error => ("❌", level.as_str().red()),
        Level::Warn => ("⚠️", level.as_str().yellow()),
        Level::Info => ("✔️", level.as_str().green()),
        Level::Debug => ("🔍", level.as_str().blue()),
        Level::Trace => ("🔬", level.as_str().purple()),
    };
    format!("{marker} {} [{label}] {msg}", target.cyan())
}
