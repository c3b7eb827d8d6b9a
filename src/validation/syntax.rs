use std::net::{IpAddr, Ipv6Addr};

/// Grammar check for a whole address.
pub trait SyntaxCheck: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Dot-atom addresses per RFC 5321/5322, with UTF-8 allowed in both parts
/// (RFC 6531). Quoted local parts are not accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfcSyntax;

impl SyntaxCheck for RfcSyntax {
    fn is_valid(&self, email: &str) -> bool {
        if email.is_empty() || email.len() > MAX_ADDRESS_LEN {
            return false;
        }
        let mut parts = email.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        valid_local(local) && valid_domain(domain)
    }
}

fn valid_local(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_LEN
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_alphanumeric() || ATEXT_SPECIALS.contains(c))
        })
}

fn valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return literal.parse::<IpAddr>().is_ok()
            || literal
                .strip_prefix("IPv6:")
                .is_some_and(|ip| ip.parse::<Ipv6Addr>().is_ok());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| valid_label(label))
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().count() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
