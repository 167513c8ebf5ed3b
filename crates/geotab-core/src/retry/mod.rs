//! Retry policy for geocoding lookups.
//!
//! Only timeouts are retried. Every other failure is classified as fatal
//! and handed back to the caller untouched, so the resolver never swallows
//! a malformed request or a broken connection.

mod classify;
mod error;
mod policy;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::GeocodeError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
