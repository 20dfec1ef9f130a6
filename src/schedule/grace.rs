//! Grace period followed by an amortizing schedule

use super::period::{round_currency, PeriodKind, PeriodRecord, Schedule};
use super::{equal_payment, equal_principal};

/// Schedule that runs once the grace period ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraceRepayment {
    EqualPayment,
    EqualPrincipal,
}

/// Flat interest-only payment due during the grace period
pub fn grace_payment(principal: f64, period_rate: f64) -> f64 {
    round_currency(principal * period_rate)
}

/// Generate a grace-period schedule
///
/// Periods `1..=grace_months` pay interest only on the full principal. The
/// remaining periods are the base schedule for `term_months - grace_months`
/// starting from the untouched principal. A grace period that would swallow
/// the whole term is cut to `term_months - 1`.
pub fn generate(
    principal: f64,
    period_rate: f64,
    term_months: u32,
    grace_months: u32,
    repayment: GraceRepayment,
) -> Schedule {
    if term_months == 0 || !principal.is_finite() || principal <= 0.0 {
        return Schedule::new();
    }

    let grace_months = grace_months.min(term_months - 1);
    let repayment_months = term_months - grace_months;

    let balance = round_currency(principal);
    let interest = grace_payment(principal, period_rate);
    let mut schedule = Schedule::with_capacity(term_months as usize);

    for period in 1..=grace_months {
        schedule.push(PeriodRecord::interest_only(period, balance, interest, PeriodKind::Grace));
    }

    let repayment_schedule = match repayment {
        GraceRepayment::EqualPayment => equal_payment::generate(principal, period_rate, repayment_months),
        GraceRepayment::EqualPrincipal => equal_principal::generate(principal, period_rate, repayment_months),
    };
    schedule.extend(repayment_schedule.offset(grace_months));

    schedule
}
