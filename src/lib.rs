//! Loan Amortization - schedule engine for five repayment policies
//!
//! This library provides:
//! - Monthly rate conversion and per-period schedule generation for equal
//!   payment, equal principal, bullet and grace-period loans
//! - Schedule-derived summaries (the single source of truth for totals)
//! - Consistency validation of generated schedules
//! - Input range checks and a calculation facade
//! - CSV export of schedules with a totals row

pub mod loan;
pub mod schedule;
pub mod analysis;
pub mod calculator;
pub mod config;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use loan::{validate_inputs, InputError, InputValidation, LoanParameters, RepaymentPolicy};
pub use schedule::{monthly_rate, PeriodKind, PeriodRecord, Schedule};
pub use analysis::{summarize, validate, Discrepancy, LoanSummary, ValidationResult};
pub use calculator::{calculate, generate_schedule, LoanCalculator, LoanResult, PolicyInfo};
pub use config::{CalculatorConfig, ToleranceConfig};
pub use error::{ConfigError, ExportError};
