//! Fee resolver
//!
//! Resolves the origination fee of a loan from its term's fee schedule:
//! - Exact breakpoint match on the truncated amount, returned as stored
//! - Otherwise Lagrange interpolation over every breakpoint of the term,
//!   rounded to a multiple of five
//! - Nearest breakpoint when the rounded estimate is not positive

use crate::interpolation::{round_up_to_nearest_five, LagrangePolynomial};
use crate::provider::{FeeTableProvider, InMemoryFeeTableProvider};
use crate::resolver::cache::FeeTableCache;
use crate::FeeCalculator;
use loanfee_common::{
    FeeError, FeeSchedule, FeeTable, LoanFeeError, LoanRequest, Result, MAX_LOAN_AMOUNT,
    MIN_LOAN_AMOUNT,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// How a fee was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Resolution {
    /// The truncated amount is a breakpoint of the schedule
    ExactMatch,
    /// Rounded interpolation estimate
    Interpolated {
        /// Estimate before rounding
        raw: f64,
    },
    /// Interpolation was degenerate, the closest breakpoint's fee was used
    NearestMatch {
        /// Breakpoint whose fee was taken
        amount_key: u32,
        /// Estimate before rounding
        raw: f64,
    },
}

/// Calculated fee with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub term: u32,
    pub amount: Decimal,
    pub fee: Decimal,
    pub resolution: Resolution,
}

/// Fee calculator over a lazily fetched fee table
pub struct FeeResolver<P> {
    provider: P,
    cache: FeeTableCache,
}

impl<P: FeeTableProvider> FeeResolver<P> {
    /// Create a resolver that fetches its table from `provider` on first use
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: FeeTableCache::new(),
        }
    }

    /// The fee table, fetched and validated on the first call
    pub fn table(&self) -> Result<Arc<FeeTable>> {
        self.cache.get_or_load(|| {
            let table = self.provider.load_fee_table()?;
            table.validate()?;
            Ok(table)
        })
    }

    /// Calculate the fee for a loan of `term` months and `amount` principal
    pub fn calculate(&self, term: u32, amount: Decimal) -> Result<Decimal> {
        Ok(self.resolve(term, amount)?.fee)
    }

    /// Calculate the fee and report how it was obtained
    #[instrument(skip(self))]
    pub fn resolve(&self, term: u32, amount: Decimal) -> Result<FeeQuote> {
        let table = self.table()?;

        let schedule = table
            .schedule(term)
            .ok_or(FeeError::UnrecognizedTerm { term })?;

        if amount < Decimal::from(MIN_LOAN_AMOUNT) || amount > Decimal::from(MAX_LOAN_AMOUNT) {
            return Err(FeeError::UnrecognizedAmount { amount }.into());
        }

        let quote = |fee, resolution| FeeQuote {
            term,
            amount,
            fee,
            resolution,
        };

        // Truncation applies to the lookup only, interpolation uses the full amount
        if let Some(fee) = amount.trunc().to_u32().and_then(|key| schedule.get(key)) {
            debug!(%fee, "Exact fee match");
            return Ok(quote(fee, Resolution::ExactMatch));
        }

        let raw = interpolate(schedule, amount)?;
        let rounded = round_up_to_nearest_five(raw);

        // NOTE: a genuine zero estimate also lands here
        if rounded <= 0.0 {
            let (amount_key, fee) = nearest_breakpoint(schedule, amount).ok_or_else(|| {
                LoanFeeError::Internal(format!("term {} has no fees", term))
            })?;
            warn!(raw, amount_key, %fee, "Degenerate interpolation, using nearest fee");
            return Ok(quote(fee, Resolution::NearestMatch { amount_key, raw }));
        }

        let fee = Decimal::try_from(rounded).map_err(|e| {
            LoanFeeError::Internal(format!("Interpolated fee {} out of range: {}", rounded, e))
        })?;
        debug!(raw, %fee, "Interpolated fee");
        Ok(quote(fee, Resolution::Interpolated { raw }))
    }
}

impl FeeResolver<InMemoryFeeTableProvider> {
    /// Create a resolver over a table supplied by the caller
    pub fn with_table(table: FeeTable) -> Self {
        Self::new(InMemoryFeeTableProvider::new(table))
    }
}

impl<P: FeeTableProvider> FeeCalculator for FeeResolver<P> {
    fn calculate_fee(&self, request: &LoanRequest) -> Result<Decimal> {
        self.calculate(request.term(), request.amount())
    }
}

/// Evaluate the term's interpolating polynomial at `amount`
fn interpolate(schedule: &FeeSchedule, amount: Decimal) -> Result<f64> {
    let to_internal = |e: rust_decimal::Error| {
        LoanFeeError::Internal(format!("Failed to convert fee data to f64: {}", e))
    };

    LagrangePolynomial::from_schedule(schedule)
        .map_err(to_internal)?
        .evaluate_decimal(amount)
        .map_err(to_internal)
}

/// Breakpoint closest to `amount`; on a tie the lower amount wins
fn nearest_breakpoint(schedule: &FeeSchedule, amount: Decimal) -> Option<(u32, Decimal)> {
    let mut nearest: Option<(Decimal, u32, Decimal)> = None;

    for (key, fee) in schedule.points() {
        let distance = (Decimal::from(key) - amount).abs();
        match nearest {
            Some((best, _, _)) if distance >= best => {}
            _ => nearest = Some((distance, key, fee)),
        }
    }

    nearest.map(|(_, key, fee)| (key, fee))
}
