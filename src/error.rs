use std::time::Duration;
use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

/// Failure of a single resolver round-trip.
///
/// Never leaves the domain checker: every variant collapses to `false`
/// for the check that produced it.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("DNS lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("DNS resolution failed: {0}")]
    Dns(#[from] ResolveError),

    #[error("DNS lookup failed: {message}")]
    Other { message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
