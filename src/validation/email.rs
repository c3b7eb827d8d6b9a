use crate::metrics::MetricsSink;
use crate::models::{Checks, DomainCheckResult, ValidationStatus, ValidationVerdict};
use crate::validation::alias::{AliasDetect, ProviderAliases};
use crate::validation::domain::DomainCheck;
use crate::validation::role::{RoleCheck, RolePrefixes};
use crate::validation::scoring::classify;
use crate::validation::syntax::{RfcSyntax, SyntaxCheck};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Where an input address stands before any network check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Missing,
    Malformed,
    /// Lowercased domain of a splittable address.
    Domain(String),
}

impl Target {
    pub(crate) fn of(email: &str) -> Self {
        let email = email.trim();
        if email.is_empty() {
            return Self::Missing;
        }
        let mut parts = email.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Self::Domain(domain.to_lowercase())
            }
            _ => Self::Malformed,
        }
    }
}

/// Per-address checks that need no network access.
#[derive(Clone)]
pub(crate) struct Scorer {
    syntax: Arc<dyn SyntaxCheck>,
    roles: Arc<dyn RoleCheck>,
    aliases: Arc<dyn AliasDetect>,
}

impl Scorer {
    pub(crate) fn syntax_ok(&self, email: &str) -> bool {
        self.syntax.is_valid(email.trim())
    }

    /// Builds the verdict for `email` from an already computed domain result.
    pub(crate) fn assess(&self, email: &str, domain: DomainCheckResult) -> ValidationVerdict {
        let address = email.trim();
        if !self.syntax.is_valid(address) {
            return ValidationVerdict::rejected(email, ValidationStatus::InvalidFormat);
        }

        let checks = Checks {
            syntax: true,
            domain_exists: domain.exists,
            mx_records: domain.has_mx,
            // No mailbox probe exists; deliverability is inferred from MX
            mailbox_exists: domain.has_mx,
            is_disposable: domain.is_disposable,
            is_role_based: self.roles.is_role_based(address),
        };
        let (status, score) = classify(&checks);

        ValidationVerdict {
            email: email.to_string(),
            validations: checks,
            score,
            status,
            alias_of: self.aliases.detect_alias(address),
        }
    }
}

/// Entry point for single and batch validation.
///
/// Syntax, role and alias rules default to the built-in implementations and
/// can be replaced with the `with_*` builders.
pub struct EmailValidator {
    pub(crate) domains: Arc<dyn DomainCheck>,
    pub(crate) scorer: Scorer,
    pub(crate) metrics: Arc<dyn MetricsSink>,
    pub(crate) workers: usize,
}

pub(crate) fn pool_size(multiplier: usize) -> usize {
    let cores = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    cores.saturating_mul(multiplier.max(1))
}

impl EmailValidator {
    pub fn new(domains: Arc<dyn DomainCheck>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            domains,
            scorer: Scorer {
                syntax: Arc::new(RfcSyntax),
                roles: Arc::new(RolePrefixes::default()),
                aliases: Arc::new(ProviderAliases),
            },
            metrics,
            workers: pool_size(2),
        }
    }

    pub fn with_syntax(mut self, syntax: Arc<dyn SyntaxCheck>) -> Self {
        self.scorer.syntax = syntax;
        self
    }

    pub fn with_roles(mut self, roles: Arc<dyn RoleCheck>) -> Self {
        self.scorer.roles = roles;
        self
    }

    pub fn with_aliases(mut self, aliases: Arc<dyn AliasDetect>) -> Self {
        self.scorer.aliases = aliases;
        self
    }

    /// Sizes the batch scoring pool as `multiplier` × available cores.
    pub fn with_worker_multiplier(mut self, multiplier: usize) -> Self {
        self.workers = pool_size(multiplier);
        self
    }

    /// Validates one address. Never fails: every outcome is a verdict.
    #[instrument(skip_all, fields(domain = tracing::field::Empty))]
    pub async fn validate_email(&self, email: &str) -> ValidationVerdict {
        let target = Target::of(email);
        if let Target::Domain(domain) = &target {
            tracing::Span::current().record("domain", domain.as_str());
        }
        let verdict = match target {
            Target::Missing => ValidationVerdict::rejected(email, ValidationStatus::MissingEmail),
            Target::Malformed => ValidationVerdict::rejected(email, ValidationStatus::InvalidFormat),
            Target::Domain(_) if !self.scorer.syntax_ok(email) => {
                ValidationVerdict::rejected(email, ValidationStatus::InvalidFormat)
            }
            Target::Domain(domain) => {
                let result = self.domains.check(&CancellationToken::new(), &domain).await;
                self.scorer.assess(email, result)
            }
        };

        debug!(status = ?verdict.status, score = verdict.score, "email validated");
        self.metrics.record_score(verdict.score);
        verdict
    }
}
