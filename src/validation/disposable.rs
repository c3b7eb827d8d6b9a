use std::collections::HashSet;

/// Membership test against a list of throwaway-mail providers.
pub trait DisposableCheck: Send + Sync {
    /// `domain` is expected in lowercase.
    fn is_disposable(&self, domain: &str) -> bool;
}

const SEED_DOMAINS: &[&str] = &[
    "0-00.usa.cc",
    "10minutemail.com",
    "discard.email",
    "dispostable.com",
    "fakeinbox.com",
    "getnada.com",
    "guerrillamail.com",
    "guerrillamail.net",
    "maildrop.cc",
    "mailinator.com",
    "mailnesia.com",
    "mintemail.com",
    "mohmal.com",
    "sharklasers.com",
    "spamgourmet.com",
    "temp-mail.org",
    "tempmail.com",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
];

/// Exact-match set of lowercase disposable domains.
#[derive(Debug, Clone)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DisposableDomains {
    fn default() -> Self {
        Self::from_domains(SEED_DOMAINS)
    }
}

impl DisposableCheck for DisposableDomains {
    fn is_disposable(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }
}
