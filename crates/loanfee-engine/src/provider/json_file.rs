//! JSON fee table file
//!
//! Expected layout, terms and amounts as string keys:
//!
//! ```json
//! {
//!     "12": { "1000": 50, "2000": 90 },
//!     "24": { "1000": 70, "2000": 100 }
//! }
//! ```

use super::FeeTableProvider;
use loanfee_common::{FeeTable, LoanFeeError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Reads the fee table from a JSON file each time it is asked
#[derive(Debug, Clone)]
pub struct JsonFileFeeTableProvider {
    path: PathBuf,
}

impl JsonFileFeeTableProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeeTableProvider for JsonFileFeeTableProvider {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_fee_table(&self) -> Result<FeeTable> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            LoanFeeError::Storage(format!(
                "Failed to read fee table {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let table = parse_fee_table(&content)?;
        debug!(terms = table.len(), "Read fee table file");
        Ok(table)
    }
}

/// Decode a fee table JSON document
pub fn parse_fee_table(json: &str) -> Result<FeeTable> {
    Ok(serde_json::from_str(json)?)
}
