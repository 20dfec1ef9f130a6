//! Loan parameters and input range checks

mod params;
pub mod inputs;

pub use params::{LoanParameters, RepaymentPolicy};
pub use inputs::{validate_inputs, InputError, InputValidation};
