//! Fee table cache
//!
//! Holds the table a resolver works from. The table is fetched on first use,
//! at most once even when several threads ask at the same time, and never
//! refreshed afterwards. A failed fetch leaves the cache empty so the next
//! call tries again.

use loanfee_common::{FeeTable, Result};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;
use tracing::{info, instrument};

/// Write-once, read-many holder of the fee table
#[derive(Debug, Default)]
pub struct FeeTableCache {
    table: RwLock<Option<Arc<FeeTable>>>,
}

impl FeeTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the table has been fetched
    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.table.read().is_some()
    }

    /// Return the cached table, running `load` if there is none yet
    #[instrument(skip_all)]
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<FeeTable>>
    where
        F: FnOnce() -> Result<FeeTable>,
    {
        if let Some(table) = self.table.read().as_ref() {
            return Ok(Arc::clone(table));
        }

        // Only one upgradable reader at a time: racing callers queue here
        let guard = self.table.upgradable_read();
        if let Some(table) = guard.as_ref() {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load()?);
        info!(terms = table.len(), "Fee table loaded");

        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = Some(Arc::clone(&table));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanfee_common::{FeeSchedule, LoanFeeError};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn table() -> FeeTable {
        FeeTable::new().with_schedule(12, FeeSchedule::new().with_fee(1000, dec!(50)))
    }

    #[test]
    fn test_loads_once() {
        let cache = FeeTableCache::new();
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let table = cache
                .get_or_load(|| {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(table())
                })
                .unwrap();
            assert!(table.contains_term(12));
        }

        assert!(cache.is_loaded());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = FeeTableCache::new();

        let err = cache
            .get_or_load(|| Err(LoanFeeError::Storage("unavailable".to_string())))
            .unwrap_err();
        assert!(matches!(err, LoanFeeError::Storage(_)));
        assert!(!cache.is_loaded());

        assert!(cache.get_or_load(|| Ok(table())).is_ok());
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_single_flight_across_threads() {
        let cache = Arc::new(FeeTableCache::new());
        let loads = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let loads = Arc::clone(&loads);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_load(|| {
                            loads.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(10));
                            Ok(table())
                        })
                        .unwrap()
                })
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
