//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `lead_assess` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Reading the lead JSON (argument or stdin) and printing the report
//!
//! Exit codes: 0 report printed, 1 unusable input, 2 initialization failure.

use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;

use lead_assess::config::{Cli, Command};
use lead_assess::initialization::{init_crypto_provider, init_logger_with};
use lead_assess::{Assessor, LeadRequest};

const EXIT_INPUT_ERROR: i32 = 1;
const EXIT_INIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    // Best effort: a missing .env is the normal case
    let _ = dotenvy::dotenv();

    let (config, command) = Cli::parse().into_parts();

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone()) {
        eprintln!("lead_assess error: {e}");
        process::exit(EXIT_INIT_ERROR);
    }
    init_crypto_provider();

    let assessor = match Assessor::from_config(&config) {
        Ok(assessor) => assessor,
        Err(e) => {
            log::error!("{e}");
            process::exit(EXIT_INIT_ERROR);
        }
    };

    let output = match command {
        Command::ValidateDomain { domain } => {
            render(&assessor.validate_domain(&domain).await, config.pretty)
        }
        Command::QualifyLead { input } => {
            let request = match read_lead_input(&input).and_then(|raw| {
                LeadRequest::from_json(&raw).context("Invalid lead request")
            }) {
                Ok(request) => request,
                Err(e) => fail_input(&e),
            };
            render(&assessor.qualify_lead(&request).await, config.pretty)
        }
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize report: {e:#}");
            process::exit(EXIT_INPUT_ERROR);
        }
    }
}

/// Returns the lead JSON: the argument itself, or stdin when it is `-`.
fn read_lead_input(input: &str) -> Result<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read lead JSON from stdin")?;
    Ok(raw)
}

fn render<T: Serialize>(report: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Writes `{"error", "timestamp"}` to stderr and exits; stdout stays empty.
fn fail_input(error: &anyhow::Error) -> ! {
    log::debug!("Rejected lead input: {error:#}");
    let body = serde_json::json!({
        "error": format!("{error:#}"),
        "timestamp": Utc::now(),
    });
    eprintln!("{body}");
    process::exit(EXIT_INPUT_ERROR);
}
