use super::FeeTableProvider;
use loanfee_common::{FeeTable, Result};

/// Serves a table handed over by the caller
#[derive(Debug, Clone)]
pub struct InMemoryFeeTableProvider {
    table: FeeTable,
}

impl InMemoryFeeTableProvider {
    pub fn new(table: FeeTable) -> Self {
        Self { table }
    }
}

impl FeeTableProvider for InMemoryFeeTableProvider {
    fn load_fee_table(&self) -> Result<FeeTable> {
        Ok(self.table.clone())
    }
}
