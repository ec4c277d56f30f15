//! DNS record probing.
//!
//! This module provides async DNS lookups using `hickory-resolver`:
//! - Address records (A)
//! - Mail exchanger records (MX), also used for the email MX check
//! - Text records (TXT)
//!
//! Each record type is an independent query. "No records" is an empty result,
//! not an error; resolver failures become `ProbeError::Dns`.

mod records;

// Re-export public API
pub use records::{lookup_a_records, lookup_mx_records, lookup_txt_records};
