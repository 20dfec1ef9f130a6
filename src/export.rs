//! Tabular export of a schedule
//!
//! Columns are fixed: Period, Payment, Principal, Interest, Balance, Note.
//! The closing totals row is taken from the summary, never re-added here.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::LoanSummary;
use crate::error::ExportError;
use crate::schedule::{PeriodRecord, Schedule};

/// Label in the Period column of the totals row
pub const TOTALS_LABEL: &str = "Total";

/// One exported table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "Payment")]
    pub payment: f64,
    #[serde(rename = "Principal")]
    pub principal: f64,
    #[serde(rename = "Interest")]
    pub interest: f64,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "Note")]
    pub note: String,
}

impl From<&PeriodRecord> for ExportRow {
    fn from(record: &PeriodRecord) -> Self {
        Self {
            period: record.period_index.to_string(),
            payment: record.payment_amount,
            principal: record.principal_component,
            interest: record.interest_component,
            balance: record.balance_after,
            note: record.kind.note().to_string(),
        }
    }
}

/// Totals row sourced from the summary
pub fn totals_row(summary: &LoanSummary) -> ExportRow {
    ExportRow {
        period: TOTALS_LABEL.to_string(),
        payment: summary.total_payment,
        principal: summary.total_principal_paid,
        interest: summary.total_interest,
        balance: summary.final_balance,
        note: String::new(),
    }
}

/// Every period row followed by the totals row
pub fn export_rows(schedule: &Schedule, summary: &LoanSummary) -> Vec<ExportRow> {
    schedule
        .iter()
        .map(ExportRow::from)
        .chain(std::iter::once(totals_row(summary)))
        .collect()
}

/// Write the schedule and totals as CSV
pub fn write_csv<W: Write>(writer: W, schedule: &Schedule, summary: &LoanSummary) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in export_rows(schedule, summary) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
