//! Core data types for LoanFee

pub mod fee_table;
pub mod loan_request;
