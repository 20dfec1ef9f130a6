//! Annual to periodic rate conversion

/// Repayment periods per year
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// Convert an annual percentage rate to a monthly decimal rate
///
/// `6.0` (6%) becomes `0.005`. Zero stays zero.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / PERIODS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_monthly_rate() {
        assert_abs_diff_eq!(monthly_rate(6.0), 0.005, epsilon = 1e-15);
        assert_abs_diff_eq!(monthly_rate(12.0), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(monthly_rate(4.5), 0.00375, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(monthly_rate(0.0), 0.0);
    }
}
