//! Totals and payment statistics derived from a schedule
//!
//! These figures are the only totals the crate reports. Nothing here is
//! recomputed from closed-form formulas, so a summary always agrees with the
//! schedule it came from.

use serde::{Deserialize, Serialize};

use crate::schedule::{round_currency, Schedule};

/// Summary statistics for a schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub periods: u32,
    pub first_payment: f64,
    pub last_payment: f64,
    pub max_payment: f64,
    pub avg_payment: f64,

    /// `total_payment - original principal`
    pub total_interest: f64,
    pub total_payment: f64,
    pub total_principal_paid: f64,
    pub final_balance: f64,

    /// Per-period interest summed directly (diagnostic only)
    pub interest_sum: f64,
}

/// Reduce a schedule to its summary
///
/// `total_interest` is derived from the rounded total payment so that
/// `total_payment == original_principal + total_interest` holds exactly.
pub fn summarize(schedule: &Schedule, original_principal: f64) -> LoanSummary {
    let (Some(first), Some(last)) = (schedule.first(), schedule.last()) else {
        return LoanSummary::default();
    };

    let payment_sum: f64 = schedule.iter().map(|r| r.payment_amount).sum();
    let total_principal_paid: f64 = schedule.iter().map(|r| r.principal_component).sum();
    let interest_sum: f64 = schedule.iter().map(|r| r.interest_component).sum();
    let max_payment = schedule
        .iter()
        .map(|r| r.payment_amount)
        .reduce(f64::max)
        .unwrap_or(0.0);

    let total_payment = round_currency(payment_sum);
    let periods = schedule.len();

    LoanSummary {
        periods: periods as u32,
        first_payment: first.payment_amount,
        last_payment: last.payment_amount,
        max_payment,
        avg_payment: round_currency(total_payment / periods as f64),
        total_interest: total_payment - original_principal,
        total_payment,
        total_principal_paid,
        final_balance: last.balance_after,
        interest_sum,
    }
}
