/// Provider-specific alias canonicalisation.
pub trait AliasDetect: Send + Sync {
    /// Returns the canonical mailbox when `email` is an alias of it.
    fn detect_alias(&self, email: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Dots are insignificant and `+tag` is dropped.
    DotsAndPlus,
    Plus,
    Hyphen,
}

fn rule_for(domain: &str) -> Option<Rule> {
    match domain {
        "gmail.com" | "googlemail.com" => Some(Rule::DotsAndPlus),
        "outlook.com" | "hotmail.com" | "live.com" | "icloud.com" | "me.com" | "fastmail.com"
        | "protonmail.com" | "proton.me" => Some(Rule::Plus),
        "yahoo.com" | "ymail.com" => Some(Rule::Hyphen),
        _ => None,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProviderAliases;

impl AliasDetect for ProviderAliases {
    fn detect_alias(&self, email: &str) -> Option<String> {
        let lowered = email.trim().to_lowercase();
        let (local, domain) = lowered.split_once('@')?;
        let rule = rule_for(domain)?;

        let mut canonical_local = match rule {
            Rule::DotsAndPlus | Rule::Plus => local.split('+').next().unwrap_or(local).to_string(),
            Rule::Hyphen => local.split('-').next().unwrap_or(local).to_string(),
        };
        if rule == Rule::DotsAndPlus {
            canonical_local.retain(|c| c != '.');
        }
        if canonical_local.is_empty() {
            return None;
        }

        let canonical_domain = if domain == "googlemail.com" {
            "gmail.com"
        } else {
            domain
        };
        let canonical = format!("{}@{}", canonical_local, canonical_domain);
        (canonical != lowered).then_some(canonical)
    }
}
