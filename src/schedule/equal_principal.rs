//! Equal-principal schedule

use super::period::{RunningBalance, Schedule};

/// Generate an equal-principal schedule
///
/// Principal is repaid in `principal / term_months` slices; interest runs on
/// the shrinking balance so the total payment declines every period.
pub fn generate(principal: f64, period_rate: f64, term_months: u32) -> Schedule {
    if term_months == 0 || !principal.is_finite() || principal <= 0.0 {
        return Schedule::new();
    }

    let slice = principal / term_months as f64;
    let mut running = RunningBalance::new(principal, period_rate);
    let mut schedule = Schedule::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = running.interest_due();
        let record = if period == term_months {
            running.close(period, interest)
        } else {
            running.pay(period, slice + interest, slice, interest)
        };
        schedule.push(record);
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::monthly_rate;

    #[test]
    fn test_interest_declines_by_fixed_step() {
        let schedule = generate(1_200_000.0, monthly_rate(12.0), 12);
        assert_eq!(schedule.len(), 12);

        assert_eq!(schedule.period(1).unwrap().interest_component, 12_000.0);
        assert_eq!(schedule.period(2).unwrap().interest_component, 11_000.0);
        assert_eq!(schedule.period(12).unwrap().interest_component, 1_000.0);

        for record in &schedule {
            assert_eq!(record.principal_component, 100_000.0);
            assert_eq!(record.payment_amount, 100_000.0 + record.interest_component);
        }
        assert_eq!(schedule.last().unwrap().balance_after, 0.0);
    }

    #[test]
    fn test_fractional_slice_still_closes() {
        let principal = 10_000_000_000.0;
        let schedule = generate(principal, monthly_rate(5.0), 600);
        assert_eq!(schedule.len(), 600);

        let principal_sum: f64 = schedule.iter().map(|r| r.principal_component).sum();
        assert_eq!(principal_sum, principal);
        assert_eq!(schedule.last().unwrap().balance_after, 0.0);

        let payments: Vec<f64> = schedule.iter().map(|r| r.payment_amount).collect();
        assert!(payments.windows(2).all(|w| w[1] <= w[0] + 1.0));
    }

    #[test]
    fn test_single_period_repays_everything() {
        let schedule = generate(1_000_000.0, monthly_rate(6.0), 1);
        let only = schedule.first().unwrap();
        assert_eq!(only.principal_component, 1_000_000.0);
        assert_eq!(only.interest_component, 5_000.0);
        assert_eq!(only.payment_amount, 1_005_000.0);
        assert_eq!(only.balance_after, 0.0);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_schedule() {
        assert!(generate(1_000_000.0, 0.01, 0).is_empty());
        assert!(generate(0.0, 0.01, 12).is_empty());
    }
}
