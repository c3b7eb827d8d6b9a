use std::collections::HashSet;

/// Detects addresses whose local part names a function rather than a person.
pub trait RoleCheck: Send + Sync {
    fn is_role_based(&self, email: &str) -> bool;
}

const ROLE_PREFIXES: &[&str] = &[
    "abuse",
    "admin",
    "administrator",
    "billing",
    "careers",
    "contact",
    "help",
    "helpdesk",
    "hostmaster",
    "info",
    "jobs",
    "marketing",
    "no-reply",
    "noreply",
    "office",
    "postmaster",
    "root",
    "sales",
    "security",
    "support",
    "team",
    "webmaster",
];

#[derive(Debug, Clone)]
pub struct RolePrefixes {
    prefixes: HashSet<String>,
}

impl RolePrefixes {
    pub fn from_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for RolePrefixes {
    fn default() -> Self {
        Self::from_prefixes(ROLE_PREFIXES)
    }
}

impl RoleCheck for RolePrefixes {
    fn is_role_based(&self, email: &str) -> bool {
        let Some((local, _)) = email.split_once('@') else {
            return false;
        };
        // support+billing@ is still the support mailbox
        let local = local.split('+').next().unwrap_or(local).to_lowercase();
        self.prefixes.contains(&local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_prefixes_are_detected_case_insensitively() {
        let roles = RolePrefixes::default();
        assert!(roles.is_role_based("admin@example.com"));
        assert!(roles.is_role_based("Support@example.com"));
        assert!(roles.is_role_based("noreply@example.com"));
    }

    #[test]
    fn test_plus_tag_is_ignored() {
        let roles = RolePrefixes::default();
        assert!(roles.is_role_based("sales+q3@example.com"));
    }

    #[test]
    fn test_personal_addresses_are_not_role_based() {
        let roles = RolePrefixes::default();
        assert!(!roles.is_role_based("jane.doe@example.com"));
        assert!(!roles.is_role_based("administrators-club@example.com"));
        assert!(!roles.is_role_based("no-at-sign"));
    }
}
