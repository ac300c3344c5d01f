//! LoanFee CLI configuration

use anyhow::Result;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the fee table document
pub const DEFAULT_FEE_TABLE_PATH: &str = "data/fees.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// JSON fee table to load
    pub fee_table_path: PathBuf,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            fee_table_path: PathBuf::from(DEFAULT_FEE_TABLE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from defaults, an optional `loanfee.toml` and
    /// `LOANFEE_` prefixed environment variables, in increasing priority
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let cfg = Config::builder()
            .set_default("fee_table_path", DEFAULT_FEE_TABLE_PATH)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name("loanfee").required(false))
            .add_source(Environment::with_prefix("LOANFEE"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}
