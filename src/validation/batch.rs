use crate::models::{DomainCheckResult, ValidationStatus, ValidationVerdict};
use crate::validation::email::{EmailValidator, Scorer, Target};
use futures::future::join_all;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

struct Job {
    index: usize,
    email: String,
    target: Target,
}

type DomainResults = Arc<HashMap<String, DomainCheckResult>>;

impl EmailValidator {
    /// Validates a batch, returning one verdict per input in input order.
    ///
    /// Each unique domain is checked exactly once, all domain checks finish
    /// before any address is scored, and scoring runs on a fixed pool that
    /// makes no further network calls. Pool workers run on the blocking
    /// thread pool, so scoring is parallel even on a current-thread runtime.
    #[instrument(skip_all, fields(emails = emails.len()))]
    pub async fn validate_emails(&self, emails: &[String]) -> Vec<ValidationVerdict> {
        if emails.is_empty() {
            return Vec::new();
        }

        let targets: Vec<Target> = emails.iter().map(|email| Target::of(email)).collect();
        let domains: BTreeSet<&str> = targets
            .iter()
            .filter_map(|target| match target {
                Target::Domain(domain) => Some(domain.as_str()),
                _ => None,
            })
            .collect();

        let unique_domains = domains.len();
        let results = self.check_domains(&domains).await;
        debug!(domains = results.len(), "domain checks joined");

        let jobs = emails
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(index, (email, target))| Job {
                index,
                email: email.clone(),
                target,
            })
            .collect();
        let verdicts = self.score_all(jobs, results).await;

        for verdict in &verdicts {
            self.metrics.record_score(verdict.score);
        }
        info!(
            emails = emails.len(),
            unique_domains,
            "batch validated"
        );
        verdicts
    }

    /// One concurrent check per unique domain, joined before returning.
    async fn check_domains(&self, domains: &BTreeSet<&str>) -> DomainResults {
        // No batch-wide deadline: each lookup is bounded by the resolver timeout
        let cancel = CancellationToken::new();
        let checks = domains.iter().map(|domain| {
            let cancel = &cancel;
            async move {
                let result = self.domains.check(cancel, domain).await;
                (domain.to_string(), result)
            }
        });
        Arc::new(join_all(checks).await.into_iter().collect())
    }

    async fn score_all(&self, jobs: Vec<Job>, results: DomainResults) -> Vec<ValidationVerdict> {
        let total = jobs.len();
        let emails: Vec<String> = jobs.iter().map(|job| job.email.clone()).collect();

        let (job_tx, job_rx) = mpsc::channel(total);
        for job in jobs {
            // Capacity equals the job count, so this never waits
            if job_tx.send(job).await.is_err() {
                break;
            }
        }
        drop(job_tx);

        let queue = Arc::new(Mutex::new(job_rx));
        let (verdict_tx, mut verdict_rx) = mpsc::unbounded_channel();
        let workers = self.workers.clamp(1, total);

        for _ in 0..workers {
            let queue = Arc::clone(&queue);
            let results = Arc::clone(&results);
            let scorer = self.scorer.clone();
            let verdict_tx = verdict_tx.clone();

            tokio::task::spawn_blocking(move || {
                loop {
                    let next = queue
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .blocking_recv();
                    let Some(job) = next else { break };
                    let verdict = score_job(&scorer, &results, &job);
                    if verdict_tx.send((job.index, verdict)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(verdict_tx);

        let mut slots: Vec<Option<ValidationVerdict>> = vec![None; total];
        while let Some((index, verdict)) = verdict_rx.recv().await {
            slots[index] = Some(verdict);
        }

        slots
            .into_iter()
            .zip(emails)
            .map(|(slot, email)| {
                slot.unwrap_or_else(|| {
                    warn!(email = %email, "scoring worker exited without a verdict");
                    ValidationVerdict::rejected(&email, ValidationStatus::Invalid)
                })
            })
            .collect()
    }
}

fn score_job(scorer: &Scorer, results: &HashMap<String, DomainCheckResult>, job: &Job) -> ValidationVerdict {
    match &job.target {
        Target::Missing => ValidationVerdict::rejected(&job.email, ValidationStatus::MissingEmail),
        Target::Malformed => ValidationVerdict::rejected(&job.email, ValidationStatus::InvalidFormat),
        Target::Domain(domain) => {
            let result = results
                .get(domain)
                .copied()
                .unwrap_or(DomainCheckResult::NEGATIVE);
            scorer.assess(&job.email, result)
        }
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
