//! Pre-flight range checks on raw loan inputs
//!
//! Runs before any schedule is generated. A failed check means nothing is
//! computed; every violated field is reported, not just the first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::LoanParameters;

/// Smallest accepted principal
pub const MIN_PRINCIPAL: f64 = 100_000.0;
/// Largest accepted principal
pub const MAX_PRINCIPAL: f64 = 10_000_000_000.0;
/// Largest accepted annual rate, in percent
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 30.0;
/// Shortest accepted term
pub const MIN_TERM_MONTHS: u32 = 1;
/// Longest accepted term
pub const MAX_TERM_MONTHS: u32 = 600;
/// Longest accepted grace period
pub const MAX_GRACE_MONTHS: u32 = 120;

/// A single field-scoped input violation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum InputError {
    #[error("principal must be between 100000 and 10000000000 (got {0})")]
    PrincipalOutOfRange(f64),

    #[error("annual rate must be between 0 and 30 percent (got {0})")]
    RateOutOfRange(f64),

    #[error("term must be between 1 and 600 months (got {0})")]
    TermOutOfRange(u32),

    #[error("grace period ({grace} months) must be shorter than the term ({term} months)")]
    GraceNotShorterThanTerm { grace: u32, term: u32 },

    #[error("grace period must not exceed 120 months (got {0})")]
    GraceTooLong(u32),
}

impl InputError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            InputError::PrincipalOutOfRange(_) => "principal",
            InputError::RateOutOfRange(_) => "annual_rate_percent",
            InputError::TermOutOfRange(_) => "term_months",
            InputError::GraceNotShorterThanTerm { .. } | InputError::GraceTooLong(_) => "grace_months",
        }
    }
}

/// Outcome of the pre-flight check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValidation {
    pub valid: bool,
    pub errors: Vec<InputError>,
}

impl InputValidation {
    /// Human-readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Range-check raw loan inputs
pub fn validate_inputs(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    grace_months: u32,
) -> InputValidation {
    let mut errors = Vec::new();

    // NaN fails both comparisons, so it lands in the error branch
    if !(principal >= MIN_PRINCIPAL && principal <= MAX_PRINCIPAL) {
        errors.push(InputError::PrincipalOutOfRange(principal));
    }

    if !(annual_rate_percent >= 0.0 && annual_rate_percent <= MAX_ANNUAL_RATE_PERCENT) {
        errors.push(InputError::RateOutOfRange(annual_rate_percent));
    }

    if !(MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(&term_months) {
        errors.push(InputError::TermOutOfRange(term_months));
    }

    if grace_months > 0 && grace_months >= term_months {
        errors.push(InputError::GraceNotShorterThanTerm {
            grace: grace_months,
            term: term_months,
        });
    }

    if grace_months > MAX_GRACE_MONTHS {
        errors.push(InputError::GraceTooLong(grace_months));
    }

    InputValidation {
        valid: errors.is_empty(),
        errors,
    }
}

impl LoanParameters {
    /// Range-check these parameters
    pub fn validate(&self) -> InputValidation {
        validate_inputs(
            self.principal,
            self.annual_rate_percent,
            self.term_months,
            self.grace_months,
        )
    }
}
