//! Calculation facade
//!
//! Routes a repayment policy to its generator, then summarizes and validates
//! the schedule and packs everything into a `LoanResult`. Each call is
//! independent; the calculator holds configuration only.

use serde::{Deserialize, Serialize};

use crate::analysis::{summarize, validate, LoanSummary, ValidationResult};
use crate::config::CalculatorConfig;
use crate::loan::{LoanParameters, RepaymentPolicy};
use crate::schedule::{grace_payment, Schedule};

/// Display metadata for the repayment policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInfo {
    pub policy: RepaymentPolicy,
    pub tag: String,
    pub label: String,
    pub localized_label: String,

    /// Interest-only payment during the grace period (grace policies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_payment: Option<f64>,

    /// Months of principal repayment after the grace period (grace policies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repayment_months: Option<u32>,
}

impl PolicyInfo {
    pub fn for_params(params: &LoanParameters) -> Self {
        let policy = params.policy;
        let (grace_payment, repayment_months) = if policy.has_grace_period() {
            (
                Some(grace_payment(params.principal, params.period_rate())),
                Some(params.repayment_months()),
            )
        } else {
            (None, None)
        };

        Self {
            policy,
            tag: policy.tag().to_string(),
            label: policy.label().to_string(),
            localized_label: policy.localized_label().to_string(),
            grace_payment,
            repayment_months,
        }
    }
}

/// Complete result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub params: LoanParameters,
    pub policy: PolicyInfo,
    pub summary: LoanSummary,
    pub validation: ValidationResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl LoanResult {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }
}

/// Amortization calculator
#[derive(Debug, Clone, Default)]
pub struct LoanCalculator {
    config: CalculatorConfig,
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Generate the full schedule for `params`
    pub fn generate_schedule(&self, params: &LoanParameters) -> Schedule {
        params.schedule()
    }

    /// Generate, summarize and validate
    pub fn calculate(&self, params: &LoanParameters) -> LoanResult {
        let schedule = params.schedule();
        let summary = summarize(&schedule, params.principal);
        let validation = validate(&schedule, params.principal, &self.config.tolerance);

        log::debug!(
            "{} principal={} rate={}% term={} grace={}: {} periods, total payment {}",
            params.policy,
            params.principal,
            params.annual_rate_percent,
            params.term_months,
            params.grace_months,
            summary.periods,
            summary.total_payment,
        );
        if !validation.is_valid {
            log::warn!(
                "{} schedule failed validation: {}",
                params.policy,
                validation.messages().join("; ")
            );
        }

        LoanResult {
            params: *params,
            policy: PolicyInfo::for_params(params),
            summary,
            validation,
            schedule: self.config.retain_schedule.then_some(schedule),
        }
    }

    /// Calculate from a raw policy tag; unknown tags use equal payment
    pub fn calculate_tagged(
        &self,
        policy_tag: &str,
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
        grace_months: u32,
    ) -> LoanResult {
        let params = LoanParameters::new(
            RepaymentPolicy::from_tag(policy_tag),
            principal,
            annual_rate_percent,
            term_months,
            grace_months,
        );
        self.calculate(&params)
    }

    /// Calculate the same loan under every repayment policy, in display order
    pub fn calculate_all(&self, params: &LoanParameters) -> Vec<LoanResult> {
        RepaymentPolicy::ALL
            .iter()
            .map(|&policy| self.calculate(&params.with_policy(policy)))
            .collect()
    }
}

/// Calculate with the default configuration
pub fn calculate(
    policy_tag: &str,
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    grace_months: u32,
) -> LoanResult {
    LoanCalculator::default().calculate_tagged(
        policy_tag,
        principal,
        annual_rate_percent,
        term_months,
        grace_months,
    )
}

/// Full per-period schedule for a raw policy tag; unknown tags use equal payment
pub fn generate_schedule(
    policy_tag: &str,
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    grace_months: u32,
) -> Schedule {
    LoanParameters::new(
        RepaymentPolicy::from_tag(policy_tag),
        principal,
        annual_rate_percent,
        term_months,
        grace_months,
    )
    .schedule()
}
