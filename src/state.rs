use crate::config::Settings;
use crate::metrics::CounterMetrics;
use crate::validation::cache::DomainCache;
use crate::validation::disposable::{DisposableCheck, DisposableDomains};
use crate::validation::domain::DomainChecker;
use crate::validation::email::EmailValidator;
use crate::validation::resolver::{DnsResolver, Resolver};
use std::sync::Arc;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub validator: EmailValidator,
    pub cache: Arc<DomainCache>,
    pub metrics: Arc<CounterMetrics>,
}

impl AppState {
    /// Wires the production resolver.
    pub fn from_settings(settings: &Settings) -> Self {
        let resolver = Arc::new(DnsResolver::new(settings.dns_timeout));
        let cache = Arc::new(DomainCache::new(settings.cache_ttl));
        Self::with_parts(
            settings,
            resolver,
            cache,
            Arc::new(DisposableDomains::default()),
        )
    }

    /// Substitution point for alternative resolvers, caches or lists.
    pub fn with_parts(
        settings: &Settings,
        resolver: Arc<dyn Resolver>,
        cache: Arc<DomainCache>,
        disposable: Arc<dyn DisposableCheck>,
    ) -> Self {
        let metrics = Arc::new(CounterMetrics::new());
        let checker = DomainChecker::new(resolver, Arc::clone(&cache), disposable, metrics.clone());
        let validator = EmailValidator::new(Arc::new(checker), metrics.clone())
            .with_worker_multiplier(settings.worker_multiplier);

        Self {
            validator,
            cache,
            metrics,
        }
    }
}
