use crate::error::LookupError;
use async_trait::async_trait;
use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
};

/// A single mail exchanger as returned by an MX query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub host: String,
    pub preference: u16,
}

impl MxRecord {
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        Self {
            host: host.into(),
            preference,
        }
    }
}

/// Host and MX lookups. Implementations own their timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn lookup_host(&self, domain: &str) -> Result<Vec<IpAddr>, LookupError>;
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;
}

/// System-configured resolver with a hard per-call timeout.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
    timeout: Duration,
}

impl DnsResolver {
    /// Uses the default upstream configuration with a single attempt per
    /// query; failed lookups are never retried.
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
            timeout,
        }
    }

    async fn bounded<T, F>(&self, lookup: F) -> Result<T, LookupError>
    where
        F: Future<Output = Result<T, LookupError>>,
    {
        tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| LookupError::Timeout(self.timeout))?
    }
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn lookup_host(&self, domain: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.bounded(async {
            let ips = self.inner.lookup_ip(domain).await?;
            Ok::<_, LookupError>(ips.iter().collect())
        })
        .await
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.bounded(async {
            let records = self.inner.mx_lookup(domain).await?;
            Ok::<_, LookupError>(
                records
                    .iter()
                    .map(|mx| MxRecord::new(mx.exchange().to_string(), mx.preference()))
                    .collect(),
            )
        })
        .await
    }
}

/// Whether an MX answer designates a usable mail exchanger.
///
/// An empty list, or the single-record null MX whose host is the root
/// (`.`), means the domain accepts no mail.
pub fn has_usable_mx(records: &[MxRecord]) -> bool {
    match records {
        [] => false,
        [only] => only.host.trim() != ".",
        _ => true,
    }
}
