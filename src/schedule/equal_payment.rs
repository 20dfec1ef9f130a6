//! Equal-payment (annuity) schedule

use super::period::{RunningBalance, Schedule};

/// Level payment that amortizes `principal` over `term_months`
///
/// Zero rate divides the principal evenly. When the compounding factor
/// overflows the payment is reported as 0 instead of a non-finite value.
pub fn annuity_payment(principal: f64, period_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }

    let n = term_months as f64;
    if period_rate == 0.0 {
        return principal / n;
    }

    let factor = (1.0 + period_rate).powf(n);
    if !factor.is_finite() {
        return 0.0;
    }

    let payment = principal * period_rate * factor / (factor - 1.0);
    if payment.is_finite() {
        payment
    } else {
        0.0
    }
}

/// Generate an equal-payment schedule
///
/// Empty when the level payment cannot be computed (overflowing factor),
/// since amortizing with a zero payment would grow the balance without bound.
pub fn generate(principal: f64, period_rate: f64, term_months: u32) -> Schedule {
    if term_months == 0 || !principal.is_finite() || principal <= 0.0 {
        return Schedule::new();
    }

    let payment = annuity_payment(principal, period_rate, term_months);
    if !(payment > 0.0) {
        log::warn!(
            "no finite level payment for principal={} rate={} term={}; empty schedule",
            principal,
            period_rate,
            term_months
        );
        return Schedule::new();
    }
    let mut running = RunningBalance::new(principal, period_rate);
    let mut schedule = Schedule::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = running.interest_due();
        let record = if period == term_months {
            running.close(period, interest)
        } else {
            running.pay(period, payment, payment - interest, interest)
        };
        schedule.push(record);
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::monthly_rate;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annuity_payment_formula() {
        // 250,000 over 30 years at 5%: textbook 1,342.05
        let payment = annuity_payment(250_000.0, monthly_rate(5.0), 360);
        assert_abs_diff_eq!(payment, 1_342.05, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        assert_eq!(annuity_payment(1_200_000.0, 0.0, 12), 100_000.0);

        let schedule = generate(1_200_000.0, 0.0, 12);
        assert_eq!(schedule.len(), 12);
        for record in &schedule {
            assert_eq!(record.payment_amount, 100_000.0);
            assert_eq!(record.principal_component, 100_000.0);
            assert_eq!(record.interest_component, 0.0);
        }
    }

    #[test]
    fn test_overflowing_factor_yields_zero_payment() {
        assert_eq!(annuity_payment(1_000_000.0, 10.0, 100_000), 0.0);
    }

    #[test]
    fn test_overflowing_factor_yields_empty_schedule() {
        // 1.025^40000 overflows f64
        assert_eq!(annuity_payment(1_000_000.0, monthly_rate(30.0), 40_000), 0.0);
        assert!(generate(1_000_000.0, monthly_rate(30.0), 40_000).is_empty());
        assert!(generate(1_000_000.0, f64::NAN, 12).is_empty());
    }

    #[test]
    fn test_constant_payment_and_closure() {
        let principal = 100_000_000.0;
        let schedule = generate(principal, monthly_rate(6.0), 120);
        assert_eq!(schedule.len(), 120);

        let first = schedule.first().unwrap().payment_amount;
        for record in schedule.iter().take(119) {
            assert_eq!(record.payment_amount, first);
            assert!(record.split_residual().abs() <= 1.0);
        }

        let last = schedule.last().unwrap();
        assert_eq!(last.balance_after, 0.0);
        assert_eq!(last.payment_amount, last.principal_component + last.interest_component);
        assert_abs_diff_eq!(last.payment_amount, first, epsilon = 2.0);

        let principal_sum: f64 = schedule.iter().map(|r| r.principal_component).sum();
        assert_eq!(principal_sum, principal);
    }

    #[test]
    fn test_interest_declines_as_balance_falls() {
        let schedule = generate(50_000_000.0, monthly_rate(4.0), 60);
        let interest: Vec<f64> = schedule.iter().map(|r| r.interest_component).collect();
        assert!(interest.windows(2).all(|w| w[1] <= w[0]));
        let balances: Vec<f64> = schedule.iter().map(|r| r.balance_after).collect();
        assert!(balances.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_schedule() {
        assert!(generate(1_000_000.0, 0.005, 0).is_empty());
        assert!(generate(0.0, 0.005, 12).is_empty());
        assert!(generate(-5.0, 0.005, 12).is_empty());
        assert!(generate(f64::NAN, 0.005, 12).is_empty());
    }
}
