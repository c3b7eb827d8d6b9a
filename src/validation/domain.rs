use crate::metrics::{LookupKind, MetricsSink};
use crate::models::DomainCheckResult;
use crate::validation::cache::DomainCache;
use crate::validation::disposable::DisposableCheck;
use crate::validation::resolver::{Resolver, has_usable_mx};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Domain-level validation seam used by the single and batch validators.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainCheck: Send + Sync {
    /// Runs the existence, MX and disposable checks for `domain`.
    ///
    /// If `cancel` fires at any point during the call the whole result is
    /// [`DomainCheckResult::NEGATIVE`].
    async fn check(&self, cancel: &CancellationToken, domain: &str) -> DomainCheckResult;
}

/// Runs the three checks as parallel tasks and joins them.
///
/// Existence answers go through the [`DomainCache`]; MX answers are always
/// fetched fresh.
pub struct DomainChecker {
    resolver: Arc<dyn Resolver>,
    cache: Arc<DomainCache>,
    disposable: Arc<dyn DisposableCheck>,
    metrics: Arc<dyn MetricsSink>,
}

impl DomainChecker {
    pub fn new(
        resolver: Arc<dyn Resolver>,
        cache: Arc<DomainCache>,
        disposable: Arc<dyn DisposableCheck>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            resolver,
            cache,
            disposable,
            metrics,
        }
    }

    pub fn cache(&self) -> &Arc<DomainCache> {
        &self.cache
    }
}

#[async_trait]
impl DomainCheck for DomainChecker {
    async fn check(&self, cancel: &CancellationToken, domain: &str) -> DomainCheckResult {
        let domain: Arc<str> = Arc::from(domain.to_lowercase());

        let existence = tokio::spawn(guarded(
            cancel.clone(),
            domain_exists(
                Arc::clone(&self.resolver),
                Arc::clone(&self.cache),
                Arc::clone(&self.metrics),
                Arc::clone(&domain),
            ),
        ));
        let mx = tokio::spawn(guarded(
            cancel.clone(),
            domain_has_mx(
                Arc::clone(&self.resolver),
                Arc::clone(&self.metrics),
                Arc::clone(&domain),
            ),
        ));
        let disposable = {
            let list = Arc::clone(&self.disposable);
            let domain = Arc::clone(&domain);
            tokio::spawn(guarded(cancel.clone(), async move {
                list.is_disposable(&domain)
            }))
        };

        // A task that panicked still counts as a (negative) reply
        let (exists, has_mx, is_disposable) = tokio::join!(existence, mx, disposable);
        let result = DomainCheckResult {
            exists: exists.unwrap_or(false),
            has_mx: has_mx.unwrap_or(false),
            is_disposable: is_disposable.unwrap_or(false),
        };

        if cancel.is_cancelled() {
            debug!(domain = %domain, "domain check cancelled, discarding partial result");
            return DomainCheckResult::NEGATIVE;
        }

        debug!(
            domain = %domain,
            exists = result.exists,
            has_mx = result.has_mx,
            is_disposable = result.is_disposable,
            "domain checked"
        );
        result
    }
}

/// Wraps one sub-check so it always yields exactly one answer: `false` if
/// cancellation is observed before, during or after the work.
async fn guarded<F>(cancel: CancellationToken, check: F) -> bool
where
    F: Future<Output = bool>,
{
    if cancel.is_cancelled() {
        return false;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        outcome = check => outcome && !cancel.is_cancelled(),
    }
}

async fn domain_exists(
    resolver: Arc<dyn Resolver>,
    cache: Arc<DomainCache>,
    metrics: Arc<dyn MetricsSink>,
    domain: Arc<str>,
) -> bool {
    if let Some(exists) = cache.get(&domain) {
        metrics.record_cache_op(true);
        return exists;
    }
    metrics.record_cache_op(false);

    let started = Instant::now();
    let lookup = resolver.lookup_host(&domain).await;
    metrics.record_lookup(LookupKind::Host, started.elapsed());

    let exists = match lookup {
        Ok(addresses) => !addresses.is_empty(),
        Err(e) => {
            debug!(domain = %domain, error = %e, "host lookup failed");
            false
        }
    };

    cache.set(&domain, exists);
    cache.clear_expired();
    exists
}

async fn domain_has_mx(
    resolver: Arc<dyn Resolver>,
    metrics: Arc<dyn MetricsSink>,
    domain: Arc<str>,
) -> bool {
    let started = Instant::now();
    let lookup = resolver.lookup_mx(&domain).await;
    metrics.record_lookup(LookupKind::Mx, started.elapsed());

    match lookup {
        Ok(records) => has_usable_mx(&records),
        Err(e) => {
            debug!(domain = %domain, error = %e, "MX lookup failed");
            false
        }
    }
}
