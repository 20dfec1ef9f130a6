//! Bullet (interest-only, balloon) schedule

use super::period::{round_currency, PeriodKind, PeriodRecord, Schedule};

/// Generate a bullet schedule
///
/// Interest is `round(principal * rate)` every period, the last included,
/// since the balance does not move until the balloon payment.
pub fn generate(principal: f64, period_rate: f64, term_months: u32) -> Schedule {
    if term_months == 0 || !principal.is_finite() || principal <= 0.0 {
        return Schedule::new();
    }

    let balance = round_currency(principal);
    let interest = round_currency(principal * period_rate);
    let mut schedule = Schedule::with_capacity(term_months as usize);

    for period in 1..term_months {
        schedule.push(PeriodRecord::interest_only(period, balance, interest, PeriodKind::InterestOnly));
    }

    schedule.push(PeriodRecord {
        period_index: term_months,
        payment_amount: balance + interest,
        principal_component: balance,
        interest_component: interest,
        balance_after: 0.0,
        is_grace_period: false,
        kind: PeriodKind::Balloon,
    });

    schedule
}
