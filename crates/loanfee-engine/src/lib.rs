//! # LoanFee Engine
//!
//! Loan origination fees by term and principal amount.
//!
//! ## Resolution
//!
//! ```text
//! amount is a breakpoint   →  stored fee
//! otherwise                →  round5(P(amount))
//! round5(P(amount)) <= 0   →  fee of the nearest breakpoint
//! ```
//!
//! Where P is the Lagrange polynomial through every (amount, fee) breakpoint
//! of the loan's term, and round5 rounds to a multiple of five.

pub mod interpolation;
pub mod provider;
pub mod resolver;

pub use provider::{FeeTableProvider, InMemoryFeeTableProvider, JsonFileFeeTableProvider};
pub use resolver::{FeeQuote, FeeResolver, Resolution};

use loanfee_common::{LoanRequest, Result};
use rust_decimal::Decimal;

/// Anything that can price a loan request
pub trait FeeCalculator {
    /// Calculate the origination fee of `request`
    fn calculate_fee(&self, request: &LoanRequest) -> Result<Decimal>;
}
