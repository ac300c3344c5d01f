//! Resolver module
//!
//! Provides fee resolution with:
//! - A single-flight, write-once fee table cache
//! - Exact lookup, interpolation and nearest-match fallback

pub mod cache;
pub mod engine;

pub use cache::FeeTableCache;
pub use engine::{FeeQuote, FeeResolver, Resolution};
