//! Schedule generation for every repayment policy

mod period;
mod rate;
pub mod bullet;
pub mod equal_payment;
pub mod equal_principal;
pub mod grace;

pub use period::{round_currency, PeriodKind, PeriodRecord, Schedule};
pub use rate::{monthly_rate, PERIODS_PER_YEAR};
pub use grace::{grace_payment, GraceRepayment};

use crate::loan::{LoanParameters, RepaymentPolicy};

/// Generate the schedule for `policy`
///
/// `grace_months` is ignored by the non-grace policies.
pub fn generate(
    policy: RepaymentPolicy,
    principal: f64,
    period_rate: f64,
    term_months: u32,
    grace_months: u32,
) -> Schedule {
    match policy {
        RepaymentPolicy::EqualPayment => equal_payment::generate(principal, period_rate, term_months),
        RepaymentPolicy::EqualPrincipal => equal_principal::generate(principal, period_rate, term_months),
        RepaymentPolicy::Bullet => bullet::generate(principal, period_rate, term_months),
        RepaymentPolicy::GraceEqualPayment => grace::generate(
            principal,
            period_rate,
            term_months,
            grace_months,
            GraceRepayment::EqualPayment,
        ),
        RepaymentPolicy::GraceEqualPrincipal => grace::generate(
            principal,
            period_rate,
            term_months,
            grace_months,
            GraceRepayment::EqualPrincipal,
        ),
    }
}

impl LoanParameters {
    /// Generate the schedule for these parameters
    pub fn schedule(&self) -> Schedule {
        generate(
            self.policy,
            self.principal,
            self.period_rate(),
            self.term_months,
            self.grace_months,
        )
    }
}
