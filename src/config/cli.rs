//! Command-line interface definition.

use clap::{Parser, Subcommand};

use crate::config::constants::{DNS_TIMEOUT_SECS, TLS_TIMEOUT_SECS, WHOIS_TIMEOUT_SECS};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Domain probing and lead qualification for outreach prioritization.
#[derive(Debug, Parser)]
#[command(name = "lead_assess", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-lookup DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, global = true)]
    pub dns_timeout_secs: u64,

    /// WHOIS timeout in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS, global = true)]
    pub whois_timeout_secs: u64,

    /// TLS connect + handshake timeout in seconds
    #[arg(long, default_value_t = TLS_TIMEOUT_SECS, global = true)]
    pub tls_timeout_secs: u64,

    /// Skip the WHOIS lookup
    #[arg(long, global = true)]
    pub no_whois: bool,

    /// Skip the TLS certificate check
    #[arg(long, global = true)]
    pub no_tls: bool,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a domain: format, DNS, WHOIS, TLS, availability, suggestions
    #[command(name = "validate-domain")]
    ValidateDomain {
        /// Domain to validate (e.g. "acme.com")
        domain: String,
    },
    /// Score a lead given as a JSON object with optional email/domain/name/phone
    #[command(name = "qualify-lead")]
    QualifyLead {
        /// Lead JSON, or "-" to read it from stdin
        input: String,
    },
}

impl Cli {
    /// Splits the parsed arguments into library configuration and the requested command.
    pub fn into_parts(self) -> (Config, Command) {
        let config = Config {
            log_level: self.log_level,
            log_format: self.log_format,
            dns_timeout_secs: self.dns_timeout_secs,
            whois_timeout_secs: self.whois_timeout_secs,
            tls_timeout_secs: self.tls_timeout_secs,
            enable_whois: !self.no_whois,
            enable_tls: !self.no_tls,
            pretty: !self.compact,
        };
        (config, self.command)
    }
}
