//! Per-period schedule records

use serde::{Deserialize, Serialize};

/// Round to the smallest currency unit (whole units)
pub fn round_currency(amount: f64) -> f64 {
    amount.round()
}

/// What a period does to the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Regular principal + interest period
    Amortizing,
    /// Interest-only period before repayment starts
    Grace,
    /// Interest-only period of a bullet loan
    InterestOnly,
    /// Final bullet period repaying the whole principal
    Balloon,
}

impl PeriodKind {
    /// Note shown next to the period in tables and exports
    pub fn note(&self) -> &'static str {
        match self {
            PeriodKind::Amortizing => "",
            PeriodKind::Grace => "grace period",
            PeriodKind::InterestOnly => "interest only",
            PeriodKind::Balloon => "final balloon",
        }
    }
}

/// One repayment period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based period number
    pub period_index: u32,
    pub payment_amount: f64,
    pub principal_component: f64,
    pub interest_component: f64,
    /// Outstanding principal after this period's payment
    pub balance_after: f64,
    pub is_grace_period: bool,
    pub kind: PeriodKind,
}

impl PeriodRecord {
    /// Interest-only period: no principal repaid, balance unchanged
    pub fn interest_only(period_index: u32, balance: f64, interest: f64, kind: PeriodKind) -> Self {
        Self {
            period_index,
            payment_amount: interest,
            principal_component: 0.0,
            interest_component: interest,
            balance_after: balance,
            is_grace_period: kind == PeriodKind::Grace,
            kind,
        }
    }

    /// Difference between the payment and its two components
    pub fn split_residual(&self) -> f64 {
        self.payment_amount - (self.principal_component + self.interest_component)
    }
}

/// Ordered sequence of period records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub periods: Vec<PeriodRecord>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            periods: Vec::with_capacity(capacity),
        }
    }

    /// Append a period record
    pub fn push(&mut self, record: PeriodRecord) {
        self.periods.push(record);
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodRecord> {
        self.periods.iter()
    }

    pub fn first(&self) -> Option<&PeriodRecord> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&PeriodRecord> {
        self.periods.last()
    }

    /// Look up a period by its 1-based index
    pub fn period(&self, period_index: u32) -> Option<&PeriodRecord> {
        let idx = (period_index as usize).checked_sub(1)?;
        self.periods.get(idx)
    }

    /// Shift every period index forward, used when a schedule follows a grace period
    pub fn offset(mut self, by: u32) -> Self {
        for record in &mut self.periods {
            record.period_index += by;
        }
        self
    }

    /// Append all periods of another schedule
    pub fn extend(&mut self, other: Schedule) {
        self.periods.extend(other.periods);
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PeriodRecord;
    type IntoIter = std::slice::Iter<'a, PeriodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// Running balance shared by the amortizing generators
///
/// Interest accrues on the unrounded balance. Each emitted principal
/// component is the drop in the rounded balance, so the principal column
/// always sums to the rounded loan amount.
#[derive(Debug, Clone)]
pub(crate) struct RunningBalance {
    balance: f64,
    outstanding: f64,
    rate: f64,
}

impl RunningBalance {
    pub(crate) fn new(principal: f64, period_rate: f64) -> Self {
        Self {
            balance: principal,
            outstanding: round_currency(principal),
            rate: period_rate,
        }
    }

    /// Unrounded interest due on the current balance
    pub(crate) fn interest_due(&self) -> f64 {
        self.balance * self.rate
    }

    /// Record a regular period repaying `principal` out of `payment`
    pub(crate) fn pay(&mut self, period_index: u32, payment: f64, principal: f64, interest: f64) -> PeriodRecord {
        self.balance -= principal;
        let after = round_currency(self.balance);
        let principal_component = self.outstanding - after;
        self.outstanding = after;

        PeriodRecord {
            period_index,
            payment_amount: round_currency(payment),
            principal_component,
            interest_component: round_currency(interest),
            balance_after: self.outstanding,
            is_grace_period: false,
            kind: PeriodKind::Amortizing,
        }
    }

    /// Record the final period, repaying whatever is still outstanding
    pub(crate) fn close(&mut self, period_index: u32, interest: f64) -> PeriodRecord {
        let principal_component = self.outstanding;
        let interest_component = round_currency(interest);
        self.balance = 0.0;
        self.outstanding = 0.0;

        PeriodRecord {
            period_index,
            payment_amount: principal_component + interest_component,
            principal_component,
            interest_component,
            balance_after: 0.0,
            is_grace_period: false,
            kind: PeriodKind::Amortizing,
        }
    }
}
