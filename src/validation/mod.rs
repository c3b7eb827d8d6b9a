/// Provider-specific alias canonicalisation (dot and `+tag` folding).
pub mod alias;

/// Batch orchestration: one domain check per unique domain, then a fixed
/// scoring pool, with verdicts returned in input order.
pub mod batch;

/// # Domain Cache
///
/// TTL map from domain to its last existence answer, guarded by a single
/// reader/writer lock. Stale entries read as absent; an optional background
/// sweeper purges them.
pub mod cache;

/// Exact-match disposable provider list.
pub mod disposable;

/// # Domain Checker
///
/// Runs the existence, MX and disposable checks for one domain as parallel
/// tasks and collapses the whole result to negative when the caller's
/// cancellation token fires.
///
/// ```no_run
/// # async fn example() {
/// use email_domain_validator::metrics::NoopMetrics;
/// use email_domain_validator::validation::cache::DomainCache;
/// use email_domain_validator::validation::disposable::DisposableDomains;
/// use email_domain_validator::validation::domain::{DomainCheck, DomainChecker};
/// use email_domain_validator::validation::resolver::DnsResolver;
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// let checker = DomainChecker::new(
///     Arc::new(DnsResolver::new(Duration::from_secs(2))),
///     Arc::new(DomainCache::new(Duration::from_secs(300))),
///     Arc::new(DisposableDomains::default()),
///     Arc::new(NoopMetrics),
/// );
/// let result = checker.check(&CancellationToken::new(), "example.com").await;
/// println!("exists={} mx={}", result.exists, result.has_mx);
/// # }
/// ```
pub mod domain;

/// Single-address validation and the shared per-address scorer.
pub mod email;

/// Host and MX lookups behind the [`Resolver`](resolver::Resolver) trait.
pub mod resolver;

/// Role-based local part detection.
pub mod role;

/// Fixed-weight scoring and status derivation.
pub mod scoring;

/// Address grammar check.
///
/// ```
/// use email_domain_validator::validation::syntax::{RfcSyntax, SyntaxCheck};
///
/// assert!(RfcSyntax.is_valid("user.name+tag@example.com"));
/// assert!(RfcSyntax.is_valid("Pelé@exämple.中国"));
/// assert!(!RfcSyntax.is_valid("invalid@ex_mple.com"));
/// ```
pub mod syntax;

pub use domain::{DomainCheck, DomainChecker};
pub use email::EmailValidator;
