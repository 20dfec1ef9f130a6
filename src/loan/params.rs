//! Loan parameter and repayment policy definitions

use serde::{Deserialize, Serialize};

use crate::schedule::monthly_rate;

/// Repayment convention used to amortize a loan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentPolicy {
    /// Constant total payment (annuity)
    #[default]
    EqualPayment,
    /// Constant principal portion, declining total payment
    EqualPrincipal,
    /// Interest only, full principal in the final period
    Bullet,
    /// Interest-only grace period followed by equal payments
    GraceEqualPayment,
    /// Interest-only grace period followed by equal principal
    GraceEqualPrincipal,
}

impl RepaymentPolicy {
    /// Every policy, in display order
    pub const ALL: [RepaymentPolicy; 5] = [
        RepaymentPolicy::EqualPayment,
        RepaymentPolicy::EqualPrincipal,
        RepaymentPolicy::Bullet,
        RepaymentPolicy::GraceEqualPayment,
        RepaymentPolicy::GraceEqualPrincipal,
    ];

    /// Resolve a policy tag, or `None` when the tag is not recognised
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "equal_payment" | "annuity" => Some(RepaymentPolicy::EqualPayment),
            "equal_principal" => Some(RepaymentPolicy::EqualPrincipal),
            "bullet" | "balloon" => Some(RepaymentPolicy::Bullet),
            "grace_equal_payment" => Some(RepaymentPolicy::GraceEqualPayment),
            "grace_equal_principal" => Some(RepaymentPolicy::GraceEqualPrincipal),
            _ => None,
        }
    }

    /// Resolve a policy tag, falling back to equal payment for unknown tags
    pub fn from_tag(tag: &str) -> Self {
        match Self::parse_tag(tag) {
            Some(policy) => policy,
            None => {
                log::warn!("unknown repayment policy tag {:?}, using equal_payment", tag);
                RepaymentPolicy::EqualPayment
            }
        }
    }

    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            RepaymentPolicy::EqualPayment => "equal_payment",
            RepaymentPolicy::EqualPrincipal => "equal_principal",
            RepaymentPolicy::Bullet => "bullet",
            RepaymentPolicy::GraceEqualPayment => "grace_equal_payment",
            RepaymentPolicy::GraceEqualPrincipal => "grace_equal_principal",
        }
    }

    /// English display name
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentPolicy::EqualPayment => "Equal payment",
            RepaymentPolicy::EqualPrincipal => "Equal principal",
            RepaymentPolicy::Bullet => "Bullet (interest only)",
            RepaymentPolicy::GraceEqualPayment => "Grace period + equal payment",
            RepaymentPolicy::GraceEqualPrincipal => "Grace period + equal principal",
        }
    }

    /// Localized display label
    pub fn localized_label(&self) -> &'static str {
        match self {
            RepaymentPolicy::EqualPayment => "원리금균등상환",
            RepaymentPolicy::EqualPrincipal => "원금균등상환",
            RepaymentPolicy::Bullet => "만기일시상환",
            RepaymentPolicy::GraceEqualPayment => "거치 후 원리금균등상환",
            RepaymentPolicy::GraceEqualPrincipal => "거치 후 원금균등상환",
        }
    }

    /// Whether the policy starts with an interest-only grace period
    pub fn has_grace_period(&self) -> bool {
        matches!(
            self,
            RepaymentPolicy::GraceEqualPayment | RepaymentPolicy::GraceEqualPrincipal
        )
    }
}

impl std::fmt::Display for RepaymentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Inputs for one amortization calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount in whole currency units
    pub principal: f64,

    /// Annual rate in percent (6.5 means 6.5%)
    pub annual_rate_percent: f64,

    /// Total term including any grace period
    pub term_months: u32,

    /// Interest-only months at the start (grace policies only)
    #[serde(default)]
    pub grace_months: u32,

    /// Repayment convention
    #[serde(default)]
    pub policy: RepaymentPolicy,
}

impl LoanParameters {
    pub fn new(
        policy: RepaymentPolicy,
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
        grace_months: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            grace_months,
            policy,
        }
    }

    /// Same loan under a different repayment policy
    pub fn with_policy(&self, policy: RepaymentPolicy) -> Self {
        Self { policy, ..*self }
    }

    /// Monthly decimal rate
    pub fn period_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }

    /// Grace months actually applied by the generators
    /// Non-grace policies ignore the grace input entirely
    pub fn effective_grace_months(&self) -> u32 {
        if self.policy.has_grace_period() {
            self.grace_months.min(self.term_months.saturating_sub(1))
        } else {
            0
        }
    }

    /// Months during which principal is repaid
    pub fn repayment_months(&self) -> u32 {
        self.term_months - self.effective_grace_months()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_resolution() {
        assert_eq!(RepaymentPolicy::from_tag("equal_principal"), RepaymentPolicy::EqualPrincipal);
        assert_eq!(RepaymentPolicy::from_tag(" Grace-Equal-Payment "), RepaymentPolicy::GraceEqualPayment);
        assert_eq!(RepaymentPolicy::from_tag("bullet"), RepaymentPolicy::Bullet);
        for policy in RepaymentPolicy::ALL {
            assert_eq!(RepaymentPolicy::parse_tag(policy.tag()), Some(policy));
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_equal_payment() {
        assert_eq!(RepaymentPolicy::parse_tag("weekly"), None);
        assert_eq!(RepaymentPolicy::from_tag("weekly"), RepaymentPolicy::EqualPayment);
        assert_eq!(RepaymentPolicy::from_tag(""), RepaymentPolicy::EqualPayment);
    }

    #[test]
    fn test_policy_defaults_to_equal_payment() {
        assert_eq!(RepaymentPolicy::default(), RepaymentPolicy::EqualPayment);

        let params: LoanParameters =
            serde_json::from_str(r#"{"principal": 1000000.0, "annual_rate_percent": 5.0, "term_months": 12}"#)
                .unwrap();
        assert_eq!(params.policy, RepaymentPolicy::EqualPayment);
        assert_eq!(params.grace_months, 0);
    }

    #[test]
    fn test_grace_months_only_apply_to_grace_policies() {
        let params = LoanParameters::new(RepaymentPolicy::EqualPayment, 1_000_000.0, 5.0, 24, 6);
        assert_eq!(params.effective_grace_months(), 0);
        assert_eq!(params.repayment_months(), 24);

        let grace = params.with_policy(RepaymentPolicy::GraceEqualPrincipal);
        assert_eq!(grace.effective_grace_months(), 6);
        assert_eq!(grace.repayment_months(), 18);
    }

    #[test]
    fn test_grace_clamped_below_term() {
        let params = LoanParameters::new(RepaymentPolicy::GraceEqualPayment, 1_000_000.0, 5.0, 12, 40);
        assert_eq!(params.effective_grace_months(), 11);
        assert_eq!(params.repayment_months(), 1);
    }
}
