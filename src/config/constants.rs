//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including probe timeouts, protocol endpoints, and the scoring table.

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// WHOIS lookup timeout in seconds (client setup plus the RDAP/WHOIS query)
pub const WHOIS_TIMEOUT_SECS: u64 = 10;
/// TLS connect + handshake timeout in seconds
pub const TLS_TIMEOUT_SECS: u64 = 5;
/// Availability store lookup timeout in seconds
pub const AVAILABILITY_TIMEOUT_SECS: u64 = 5;

// Protocol endpoints
pub const TLS_PORT: u16 = 443;

// Availability and suggestions
/// Reference availability policy: domains containing this marker count as already tracked
pub const UNAVAILABLE_MARKER: &str = "test";
pub const UNAVAILABLE_REASON: &str = "Domain already registered in our system";
pub const MAX_SUGGESTIONS: usize = 3;

/// Free-mail providers; an address on one of these says nothing about the company
pub const FREE_EMAIL_PROVIDERS: [&str; 8] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "mail.com",
    "aol.com",
    "protonmail.com",
];

// Domain authority heuristic
pub const AUTHORITY_TLD_COM: i32 = 20;
pub const AUTHORITY_TLD_COM_BR: i32 = 15;
pub const AUTHORITY_TLD_ORG_NET: i32 = 10;
/// Label shorter than this many characters earns `AUTHORITY_SHORT_LABEL_BONUS`
pub const SHORT_LABEL_LEN: usize = 8;
pub const AUTHORITY_SHORT_LABEL_BONUS: i32 = 15;
/// Label shorter than this many characters earns `AUTHORITY_MEDIUM_LABEL_BONUS`
pub const MEDIUM_LABEL_LEN: usize = 15;
pub const AUTHORITY_MEDIUM_LABEL_BONUS: i32 = 10;
/// Upper bound of the external authority signal
pub const MAX_AUTHORITY_SIGNAL: u8 = 25;

// Company size thresholds (strictly greater than)
pub const LARGE_COMPANY_AUTHORITY: u8 = 50;
pub const MEDIUM_COMPANY_AUTHORITY: u8 = 30;

// Lead scoring weights
pub const SCORE_EMAIL_VALID: i32 = 10;
pub const SCORE_EMAIL_MX: i32 = 10;
pub const SCORE_EMAIL_NOT_FREE: i32 = 10;
/// Domain authority contributes at most this many points
pub const SCORE_AUTHORITY_CAP: u8 = 40;
/// Phone must be longer than this many characters to count
pub const MIN_PHONE_LEN: usize = 8;
pub const SCORE_PHONE: i32 = 10;
pub const SCORE_FULL_NAME: i32 = 10;
pub const SCORE_PARTIAL_NAME: i32 = 5;
pub const SCORE_SIZE_LARGE: i32 = 10;
pub const SCORE_SIZE_MEDIUM: i32 = 7;
pub const SCORE_SIZE_SMALL: i32 = 4;
pub const MAX_SCORE: u8 = 100;

// Qualification thresholds (inclusive lower bounds)
pub const HIGH_QUALIFICATION_SCORE: u8 = 80;
pub const MEDIUM_QUALIFICATION_SCORE: u8 = 60;
pub const LOW_QUALIFICATION_SCORE: u8 = 40;
