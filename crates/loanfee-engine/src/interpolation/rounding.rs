//! Fee rounding
//!
//! Interpolated fees are reported as multiples of five:
//!
//! ```text
//! ceil(v) % 5 == 0  →  ceil(v)
//! otherwise         →  round((v + 2.5) / 5) * 5
//! ```
//!
//! `round` is half away from zero. Negative estimates above -5
//! collapse to zero, which the resolver treats as a degenerate result.

use loanfee_common::FEE_ROUNDING_STEP;

/// Round a raw interpolated fee to a multiple of five
pub fn round_up_to_nearest_five(value: f64) -> f64 {
    let step = FEE_ROUNDING_STEP as f64;
    let ceiling = value.ceil();

    // Integer remainder of the ceiling
    if (ceiling as i64) % FEE_ROUNDING_STEP == 0 {
        return ceiling;
    }

    ((value + step / 2.0) / step).round() * step
}
