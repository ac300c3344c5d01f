//! Lagrange polynomial interpolation
//!
//! ```text
//! P(x) = Σ_j y_j · L_j(x)
//! L_j(x) = ∏_{m≠j} (x - x_m) / (x_j - x_m)
//! ```
//!
//! The polynomial is evaluated straight from the sample points and never
//! expanded into monomial coefficients, whose x^19 terms would swamp the fees
//! of a twenty breakpoint schedule.

use loanfee_common::FeeSchedule;
use rust_decimal::Decimal;

/// The unique polynomial of degree ≤ n-1 through n sample points
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    points: Vec<(f64, f64)>,
}

impl LagrangePolynomial {
    /// Fit through the given `(x, y)` points. The x values must be distinct.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Fit through every breakpoint of a schedule, in ascending amount order
    pub fn from_schedule(schedule: &FeeSchedule) -> Result<Self, rust_decimal::Error> {
        let points = schedule
            .points()
            .map(|(amount, fee)| -> Result<(f64, f64), rust_decimal::Error> {
                Ok((f64::from(amount), f64::try_from(fee)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(points))
    }

    /// Degree of the fitted polynomial (0 for a single point)
    #[cfg(test)]
    fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[cfg(test)]
    fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Evaluate the j-th basis polynomial at `x`
    fn basis(&self, j: usize, x: f64) -> f64 {
        let (x_j, _) = self.points[j];
        self.points
            .iter()
            .enumerate()
            .filter(|(m, _)| *m != j)
            .fold(1.0, |acc, (_, (x_m, _))| acc * (x - x_m) / (x_j - x_m))
    }

    /// Evaluate the polynomial at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.points
            .iter()
            .enumerate()
            .map(|(j, (_, y_j))| y_j * self.basis(j, x))
            .sum()
    }

    /// Evaluate at a decimal amount
    pub fn evaluate_decimal(&self, x: Decimal) -> Result<f64, rust_decimal::Error> {
        Ok(self.evaluate(f64::try_from(x)?))
    }
}
