//! Loan request value

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan to calculate the origination fee for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Loan duration in months
    term: u32,
    /// Principal in currency units
    amount: Decimal,
}

impl LoanRequest {
    pub fn new(term: u32, amount: Decimal) -> Self {
        Self { term, amount }
    }

    pub fn term(&self) -> u32 {
        self.term
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_accessors() {
        let request = LoanRequest::new(24, dec!(2750.00));
        assert_eq!(request.term(), 24);
        assert_eq!(request.amount(), dec!(2750));
    }

    #[test]
    fn test_serde_shape() {
        let request: LoanRequest =
            serde_json::from_str(r#"{"term": 12, "amount": "2999.97"}"#).unwrap();
        assert_eq!(request, LoanRequest::new(12, dec!(2999.97)));
    }
}
