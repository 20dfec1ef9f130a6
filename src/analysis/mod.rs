//! Schedule-derived summaries and consistency validation

pub mod summary;
pub mod validation;

pub use summary::{summarize, LoanSummary};
pub use validation::{validate, Discrepancy, ValidationResult};
