//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, scoring weights, thresholds)
//! - The library `Config` struct
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
