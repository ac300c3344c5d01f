//! Fee table providers
//!
//! The resolver never reads storage itself. It asks a [`FeeTableProvider`]
//! for the table once and keeps the result:
//! - [`InMemoryFeeTableProvider`]: a table supplied by the caller
//! - [`JsonFileFeeTableProvider`]: a JSON document on disk

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryFeeTableProvider;
pub use json_file::{parse_fee_table, JsonFileFeeTableProvider};

use loanfee_common::{FeeTable, Result};

/// Source of the fee table
#[cfg_attr(test, mockall::automock)]
pub trait FeeTableProvider: Send + Sync {
    /// Fetch the complete term → amount → fee table
    fn load_fee_table(&self) -> Result<FeeTable>;
}
