use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Runtime settings for the validator service.
///
/// Every value has a default; `from_env` only overrides the keys that are
/// present. A key that is present but unparsable is an error rather than a
/// silent fallback.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub port: u16,
    /// Maximum age of a cached domain-existence answer.
    pub cache_ttl: Duration,
    /// Timeout applied to each individual resolver call.
    pub dns_timeout: Duration,
    /// Period of the background expired-entry sweep; `None` disables it.
    pub sweep_interval: Option<Duration>,
    /// Scoring pool size as a multiple of available CPU cores.
    pub worker_multiplier: usize,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            cache_ttl: Duration::from_secs(300),
            dns_timeout: Duration::from_millis(2000),
            sweep_interval: Some(Duration::from_secs(60)),
            worker_multiplier: 2,
            log_format: LogFormat::Compact,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let cache_ttl = parse_or(&lookup, "DOMAIN_CACHE_TTL_SECS", 300u64).map(Duration::from_secs)?;
        let dns_timeout = parse_or(&lookup, "DNS_TIMEOUT_MS", 2000u64).map(Duration::from_millis)?;
        let sweep_secs: u64 = parse_or(&lookup, "CACHE_SWEEP_INTERVAL_SECS", 60)?;
        let worker_multiplier: usize = parse_or(&lookup, "WORKER_MULTIPLIER", defaults.worker_multiplier)?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            bind_address,
            port,
            cache_ttl,
            dns_timeout,
            sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            worker_multiplier: worker_multiplier.max(1),
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
