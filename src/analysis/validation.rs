//! Consistency checks for a generated schedule
//!
//! Validation never fails. Every broken invariant becomes a `Discrepancy` on
//! the returned result and the caller decides what to do with it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ToleranceConfig;
use crate::schedule::{round_currency, Schedule};

/// A single broken schedule invariant
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Discrepancy {
    #[error("principal components sum to {principal_sum}, expected {original_principal} (difference {difference})")]
    PrincipalSumMismatch {
        principal_sum: f64,
        original_principal: f64,
        difference: f64,
    },

    #[error("schedule has no periods for a principal of {original_principal}")]
    EmptySchedule { original_principal: f64 },

    #[error("final balance is {final_balance}, expected 0")]
    NonZeroFinalBalance { final_balance: f64 },

    #[error("period {period_index}: payment {payment} differs from principal + interest {split} by {residual}")]
    PaymentSplitMismatch {
        period_index: u32,
        payment: f64,
        split: f64,
        residual: f64,
    },

    #[error("{count} more period(s) with payment/split mismatches")]
    MorePaymentSplitMismatches { count: usize },

    #[error("total payment {total_payment} differs from principal + interest {expected} by {difference} (tolerance {tolerance})")]
    TotalPaymentMismatch {
        total_payment: f64,
        expected: f64,
        difference: f64,
        tolerance: f64,
    },

    #[error("balance rises from {previous} to {current} at period {period_index}")]
    BalanceIncreased {
        period_index: u32,
        previous: f64,
        current: f64,
    },
}

/// Outcome of validating a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Broken invariants, in check order
    pub discrepancies: Vec<Discrepancy>,

    // Raw figures that were compared
    pub principal_sum: f64,
    pub final_balance: f64,
    pub original_principal: f64,
}

impl ValidationResult {
    /// Human-readable messages, one per discrepancy
    pub fn messages(&self) -> Vec<String> {
        self.discrepancies.iter().map(|d| d.to_string()).collect()
    }
}

/// Check a schedule against the principal it was generated for
pub fn validate(schedule: &Schedule, original_principal: f64, tolerance: &ToleranceConfig) -> ValidationResult {
    let mut discrepancies = Vec::new();

    let principal_sum: f64 = schedule.iter().map(|r| r.principal_component).sum();
    let interest_sum: f64 = schedule.iter().map(|r| r.interest_component).sum();
    let payment_sum: f64 = schedule.iter().map(|r| r.payment_amount).sum();
    let final_balance = schedule.last().map(|r| r.balance_after).unwrap_or(0.0);

    // 1. principal column repays the loan
    let difference = principal_sum - original_principal;
    if !(difference.abs() <= tolerance.principal) {
        discrepancies.push(Discrepancy::PrincipalSumMismatch {
            principal_sum,
            original_principal,
            difference,
        });
    }

    // 2. loan is closed out exactly
    if schedule.is_empty() {
        if original_principal > 0.0 {
            discrepancies.push(Discrepancy::EmptySchedule { original_principal });
        }
    } else if final_balance != 0.0 {
        discrepancies.push(Discrepancy::NonZeroFinalBalance { final_balance });
    }

    // 3. each payment splits into principal + interest
    let mut split_mismatches = 0;
    for record in schedule {
        let residual = record.split_residual();
        if !(residual.abs() <= tolerance.per_period) {
            split_mismatches += 1;
            if split_mismatches <= tolerance.max_reported_periods {
                discrepancies.push(Discrepancy::PaymentSplitMismatch {
                    period_index: record.period_index,
                    payment: record.payment_amount,
                    split: record.principal_component + record.interest_component,
                    residual,
                });
            }
        }
    }
    if split_mismatches > tolerance.max_reported_periods {
        discrepancies.push(Discrepancy::MorePaymentSplitMismatches {
            count: split_mismatches - tolerance.max_reported_periods,
        });
    }

    // 4. totals agree, allowing the rounding slack accumulated per period
    let expected = original_principal + interest_sum;
    let difference = payment_sum - expected;
    let total_tolerance = tolerance.total_tolerance(schedule.len());
    if !(difference.abs() <= total_tolerance) {
        discrepancies.push(Discrepancy::TotalPaymentMismatch {
            total_payment: payment_sum,
            expected,
            difference,
            tolerance: total_tolerance,
        });
    }

    // 5. balance never grows
    let mut previous = round_currency(original_principal);
    for record in schedule {
        if record.balance_after > previous {
            discrepancies.push(Discrepancy::BalanceIncreased {
                period_index: record.period_index,
                previous,
                current: record.balance_after,
            });
            break;
        }
        previous = record.balance_after;
    }

    ValidationResult {
        is_valid: discrepancies.is_empty(),
        discrepancies,
        principal_sum,
        final_balance,
        original_principal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{equal_payment, monthly_rate, PeriodKind, PeriodRecord};

    fn record(period_index: u32, payment: f64, principal: f64, interest: f64, balance: f64) -> PeriodRecord {
        PeriodRecord {
            period_index,
            payment_amount: payment,
            principal_component: principal,
            interest_component: interest,
            balance_after: balance,
            is_grace_period: false,
            kind: PeriodKind::Amortizing,
        }
    }

    #[test]
    fn test_generated_schedule_is_valid() {
        let schedule = equal_payment::generate(350_000_000.0, monthly_rate(4.2), 360);
        let result = validate(&schedule, 350_000_000.0, &ToleranceConfig::default());
        assert!(result.is_valid, "{:?}", result.messages());
        assert_eq!(result.principal_sum, 350_000_000.0);
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.original_principal, 350_000_000.0);
    }

    #[test]
    fn test_detects_principal_and_balance_problems() {
        let mut schedule = Schedule::new();
        schedule.push(record(1, 510.0, 500.0, 10.0, 500.0));
        schedule.push(record(2, 405.0, 400.0, 5.0, 100.0));

        let result = validate(&schedule, 1_000.0, &ToleranceConfig::default());
        assert!(!result.is_valid);
        assert!(matches!(
            result.discrepancies[0],
            Discrepancy::PrincipalSumMismatch { principal_sum, .. } if principal_sum == 900.0
        ));
        assert_eq!(
            result.discrepancies[1],
            Discrepancy::NonZeroFinalBalance { final_balance: 100.0 }
        );
        assert_eq!(result.final_balance, 100.0);
    }

    #[test]
    fn test_limits_reported_split_mismatches() {
        let mut schedule = Schedule::new();
        let mut balance = 10_000.0;
        for period in 1..=10 {
            balance -= 1_000.0;
            schedule.push(record(period, 1_050.0, 1_000.0, 10.0, balance));
        }

        let tolerance = ToleranceConfig {
            max_reported_periods: 3,
            ..ToleranceConfig::default()
        };
        let result = validate(&schedule, 10_000.0, &tolerance);

        let listed: Vec<u32> = result
            .discrepancies
            .iter()
            .filter_map(|d| match d {
                Discrepancy::PaymentSplitMismatch { period_index, .. } => Some(*period_index),
                _ => None,
            })
            .collect();
        assert_eq!(listed, vec![1, 2, 3]);
        assert!(result
            .discrepancies
            .contains(&Discrepancy::MorePaymentSplitMismatches { count: 7 }));
        // 10 x 40 of residual exceeds 1 + 10 x 1
        assert!(result
            .discrepancies
            .iter()
            .any(|d| matches!(d, Discrepancy::TotalPaymentMismatch { .. })));
    }

    #[test]
    fn test_detects_rising_balance() {
        let mut schedule = Schedule::new();
        schedule.push(record(1, 0.0, -10.0, 10.0, 1_010.0));
        schedule.push(record(2, 1_020.0, 1_010.0, 10.0, 0.0));

        let result = validate(&schedule, 1_000.0, &ToleranceConfig::default());
        assert_eq!(
            result.discrepancies,
            vec![Discrepancy::BalanceIncreased {
                period_index: 1,
                previous: 1_000.0,
                current: 1_010.0,
            }]
        );
    }

    #[test]
    fn test_empty_schedule() {
        let result = validate(&Schedule::new(), 1_000_000.0, &ToleranceConfig::default());
        assert!(!result.is_valid);
        assert!(result
            .discrepancies
            .contains(&Discrepancy::EmptySchedule { original_principal: 1_000_000.0 }));

        let zero = validate(&Schedule::new(), 0.0, &ToleranceConfig::default());
        assert!(zero.is_valid);
    }

    #[test]
    fn test_messages_are_readable() {
        let mut schedule = Schedule::new();
        schedule.push(record(1, 1_000.0, 990.0, 5.0, 0.0));
        let result = validate(&schedule, 990.0, &ToleranceConfig::default());
        let messages = result.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("period 1: payment 1000"));
        assert!(messages[1].starts_with("total payment 1000"));
    }
}
