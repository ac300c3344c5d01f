//! # LoanFee Common
//!
//! Shared types and errors for the LoanFee origination fee calculator.
//!
//! ## Core Types
//!
//! - [`LoanRequest`]: Term (months) and principal amount of a loan
//! - [`FeeTable`]: Known fees per term, keyed by whole-number amount
//! - [`FeeSchedule`]: The amount → fee breakpoints of a single term
//!
//! ## Errors
//!
//! - [`LoanFeeError`]: Unified error type, with [`FeeError`] for rejected input

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{FeeError, LoanFeeError, Result};
pub use types::{
    fee_table::{FeeSchedule, FeeTable},
    loan_request::LoanRequest,
};

/// LoanFee version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest principal a fee can be calculated for (inclusive)
pub const MIN_LOAN_AMOUNT: u32 = 1_000;

/// Largest principal a fee can be calculated for (inclusive)
pub const MAX_LOAN_AMOUNT: u32 = 20_000;

/// Interpolated fees are rounded to a multiple of this step
pub const FEE_ROUNDING_STEP: i64 = 5;
