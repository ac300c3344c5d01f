//! LoanFee command line calculator
//!
//! Prints the origination fee for a loan term and amount, or the reference
//! quotes when called without arguments.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use loanfee_engine::{FeeQuote, FeeResolver, JsonFileFeeTableProvider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;

/// Loans quoted when no term and amount are given
const REFERENCE_LOANS: [(u32, Decimal); 4] = [
    (24, dec!(2750)),
    (12, dec!(4500)),
    (12, dec!(2501)),
    (12, dec!(2999.97)),
];

#[derive(Debug, Parser)]
#[command(name = "loanfee", version, about = "Calculate loan origination fees")]
struct Cli {
    /// Loan term in months
    #[arg(requires = "amount")]
    term: Option<u32>,

    /// Loan amount
    amount: Option<Decimal>,

    /// Fee table JSON file (overrides LOANFEE_FEE_TABLE_PATH)
    #[arg(long)]
    fees: Option<PathBuf>,

    /// Print quotes as JSON lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn loans(&self) -> Vec<(u32, Decimal)> {
        match (self.term, self.amount) {
            (Some(term), Some(amount)) => vec![(term, amount)],
            _ => REFERENCE_LOANS.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let fee_table_path = cli.fees.clone().unwrap_or(config.fee_table_path);
    info!("Using fee table {}", fee_table_path.display());

    let resolver = FeeResolver::new(JsonFileFeeTableProvider::new(fee_table_path));

    for (term, amount) in cli.loans() {
        let quote = resolver
            .resolve(term, amount)
            .with_context(|| format!("Failed to calculate fee for {} months, {}", term, amount))?;
        println!("{}", render(&quote, cli.json)?);
    }

    Ok(())
}

fn render(quote: &FeeQuote, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(quote)?);
    }
    Ok(format!(
        "term={} amount={} fee={}",
        quote.term, quote.amount, quote.fee
    ))
}
