use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
}

/// Outcome of the three domain-level checks, shared by every address on
/// that domain within one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainCheckResult {
    pub exists: bool,
    pub has_mx: bool,
    pub is_disposable: bool,
}

impl DomainCheckResult {
    pub const NEGATIVE: Self = Self {
        exists: false,
        has_mx: false,
        is_disposable: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Valid,
    ProbablyValid,
    Invalid,
    InvalidFormat,
    InvalidDomain,
    NoMxRecords,
    Disposable,
    MissingEmail,
}

impl ValidationStatus {
    /// Whether the status counts towards a batch's valid total.
    pub fn is_deliverable(self) -> bool {
        matches!(self, Self::Valid | Self::ProbablyValid)
    }
}

/// Individual yes/no checks behind a verdict.
///
/// `is_disposable` and `is_role_based` report the raw flags; the score
/// rewards them being `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checks {
    pub syntax: bool,
    pub domain_exists: bool,
    pub mx_records: bool,
    pub mailbox_exists: bool,
    pub is_disposable: bool,
    pub is_role_based: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationVerdict {
    /// The address exactly as submitted.
    pub email: String,
    pub validations: Checks,
    /// Confidence in `0..=100`.
    pub score: u8,
    pub status: ValidationStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alias_of: Option<String>,
}

impl ValidationVerdict {
    /// A verdict decided before any check ran.
    pub fn rejected(email: &str, status: ValidationStatus) -> Self {
        Self {
            email: email.to_string(),
            validations: Checks::default(),
            score: 0,
            status,
            alias_of: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkValidationResponse {
    pub results: Vec<ValidationVerdict>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BulkValidationResponse {
    pub fn from_verdicts(results: Vec<ValidationVerdict>) -> Self {
        let valid_count = results
            .iter()
            .filter(|v| v.status.is_deliverable())
            .count();
        let invalid_count = results.len() - valid_count;
        Self {
            results,
            valid_count,
            invalid_count,
        }
    }
}
