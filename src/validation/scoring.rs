use crate::models::{Checks, ValidationStatus};

const SYNTAX_WEIGHT: u8 = 20;
const DOMAIN_EXISTS_WEIGHT: u8 = 20;
const MX_RECORDS_WEIGHT: u8 = 20;
const MAILBOX_EXISTS_WEIGHT: u8 = 20;
const NOT_DISPOSABLE_WEIGHT: u8 = 10;
const NOT_ROLE_BASED_WEIGHT: u8 = 10;

/// Fixed score for domains that exist but accept no mail.
pub const NO_MX_SCORE: u8 = 40;

const VALID_THRESHOLD: u8 = 90;
const PROBABLY_VALID_THRESHOLD: u8 = 70;

/// Weighted sum of the independent checks, at most 100.
pub fn weighted_score(checks: &Checks) -> u8 {
    [
        (checks.syntax, SYNTAX_WEIGHT),
        (checks.domain_exists, DOMAIN_EXISTS_WEIGHT),
        (checks.mx_records, MX_RECORDS_WEIGHT),
        (checks.mailbox_exists, MAILBOX_EXISTS_WEIGHT),
        (!checks.is_disposable, NOT_DISPOSABLE_WEIGHT),
        (!checks.is_role_based, NOT_ROLE_BASED_WEIGHT),
    ]
    .into_iter()
    .filter_map(|(passed, weight)| passed.then_some(weight))
    .sum()
}

/// Status and final score; the first matching rule wins.
pub fn classify(checks: &Checks) -> (ValidationStatus, u8) {
    let score = weighted_score(checks);

    if !checks.domain_exists {
        (ValidationStatus::InvalidDomain, score)
    } else if !checks.mx_records {
        (ValidationStatus::NoMxRecords, NO_MX_SCORE)
    } else if checks.is_disposable {
        (ValidationStatus::Disposable, score)
    } else if score >= VALID_THRESHOLD {
        (ValidationStatus::Valid, score)
    } else if score >= PROBABLY_VALID_THRESHOLD {
        (ValidationStatus::ProbablyValid, score)
    } else {
        (ValidationStatus::Invalid, score)
    }
}
