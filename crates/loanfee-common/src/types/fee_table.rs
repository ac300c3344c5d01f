//! Fee table types
//!
//! A [`FeeTable`] maps each loan term (months) to a [`FeeSchedule`]: the known
//! fees for a handful of whole-number principal amounts. Both levels are kept
//! in ascending key order, which interpolation and the nearest-match fallback
//! rely on.

use crate::error::FeeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Known fees of a single term, keyed by principal amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeSchedule(BTreeMap<u32, Decimal>);

impl FeeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breakpoint, replacing any fee already stored for `amount`
    pub fn with_fee(mut self, amount: u32, fee: Decimal) -> Self {
        self.0.insert(amount, fee);
        self
    }

    /// Stored fee for an exact amount key
    pub fn get(&self, amount: u32) -> Option<Decimal> {
        self.0.get(&amount).copied()
    }

    /// Breakpoints in ascending amount order
    pub fn points(&self) -> impl Iterator<Item = (u32, Decimal)> + '_ {
        self.0.iter().map(|(amount, fee)| (*amount, *fee))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, Decimal)> for FeeSchedule {
    fn from_iter<I: IntoIterator<Item = (u32, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fee schedules for every supported term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTable(BTreeMap<u32, FeeSchedule>);

impl FeeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term's schedule, replacing any schedule already stored for it
    pub fn with_schedule(mut self, term: u32, schedule: FeeSchedule) -> Self {
        self.0.insert(term, schedule);
        self
    }

    pub fn schedule(&self, term: u32) -> Option<&FeeSchedule> {
        self.0.get(&term)
    }

    pub fn contains_term(&self, term: u32) -> bool {
        self.0.contains_key(&term)
    }

    /// Supported terms in ascending order
    pub fn terms(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the table can serve calculations: at least one term and no
    /// empty schedules.
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.is_empty() {
            return Err(FeeError::InvalidFeeTable("table has no terms".to_string()));
        }

        for (term, schedule) in &self.0 {
            if schedule.is_empty() {
                return Err(FeeError::InvalidFeeTable(format!("term {} has no fees", term)));
            }
        }

        Ok(())
    }
}

impl FromIterator<(u32, FeeSchedule)> for FeeTable {
    fn from_iter<I: IntoIterator<Item = (u32, FeeSchedule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
