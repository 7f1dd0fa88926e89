//! # Substreams Pricing - Monthly Cost Estimates for Chain Data Streams
//!
//! This crate estimates what it costs per month to process a blockchain's
//! data stream, given how much data the chain produces per 10,000 blocks,
//! how many blocks it produces per month, and two linear rates: one per
//! terabyte processed and one per million blocks processed.
//!
//! ## How the Code Is Organized
//! - `core/`: chain catalog, pricing rates and the cost formula
//! - `report/`: number formatting and the text report
//! - `cli/`: argument parsing and run mode resolution
//! - `error/`: the crate error type
//!
//! ## Run Modes
//! 1. `--all` prices every catalog chain and prints a summary table
//! 2. `--chain <id>` prices one catalog chain
//! 3. `--bytes-per-10k` with `--blocks-per-month` prices a custom profile
//! 4. With none of these, eth-mainnet is shown as an example
//!
//! `--cost-per-tb` and `--cost-per-1m-blocks` override the rates in any mode.

pub mod cli;
pub mod core;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use cli::{Opt, RunMode};
pub use crate::core::{
    all_chains, calculate_cost, chain_cost, get_chain, ChainProfile, CostBreakdown, CostSummary,
    PricingRates,
};
pub use error::{PricingError, Result};
pub use report::{format_usd, render_report};
