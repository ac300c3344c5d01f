//! Interpolation module
//!
//! Provides the numeric building blocks of fee resolution:
//! - Lagrange polynomial evaluation over a term's breakpoints
//! - Fee rounding to the nearest multiple of five

pub mod lagrange;
pub mod rounding;

pub use lagrange::LagrangePolynomial;
pub use rounding::round_up_to_nearest_five;
