use crate::cli::mode::RunMode;
use crate::core::chains::{find_chain, get_chain};
use crate::core::pricing::validation::{parse_block_count, parse_non_negative_f64};
use crate::core::pricing::PricingRates;
use crate::error::{PricingError, Result};
use clap::Parser;
use log::{debug, warn};

/// Value parser for `--chain`; rejects identifiers missing from the catalog
fn parse_chain_id(s: &str) -> std::result::Result<String, String> {
    match find_chain(s) {
        Some(chain) => Ok(chain.id.to_string()),
        None => Err(PricingError::UnknownChain(s.to_string()).to_string()),
    }
}

fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    parse_non_negative_f64(s).map_err(|e| e.to_string())
}

fn parse_blocks(s: &str) -> std::result::Result<u64, String> {
    parse_block_count(s).map_err(|e| e.to_string())
}

#[derive(Debug, Parser)]
#[command(name = "substreams-pricing")]
#[command(version, about = "Substreams EVM Pricing Calculator")]
pub struct Opt {
    /// Use a preset chain profile
    #[arg(long, value_name = "ID", value_parser = parse_chain_id)]
    pub chain: Option<String>,

    /// GB per 10,000 blocks (custom)
    #[arg(long = "bytes-per-10k", value_name = "GB", value_parser = parse_amount)]
    pub bytes_per_10k: Option<f64>,

    /// Blocks per month (custom)
    #[arg(long, value_name = "BLOCKS", value_parser = parse_blocks)]
    pub blocks_per_month: Option<u64>,

    /// Cost per TB/month [default: 150.00]
    #[arg(long = "cost-per-tb", value_name = "USD", value_parser = parse_amount)]
    pub cost_per_tb: Option<f64>,

    /// Cost per 1M blocks/month [default: 1.75]
    #[arg(long = "cost-per-1m-blocks", value_name = "USD", value_parser = parse_amount)]
    pub cost_per_1m_blocks: Option<f64>,

    /// Show pricing for all preset chains
    #[arg(long)]
    pub all: bool,
}

impl Opt {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the single run mode for this invocation
    ///
    /// Precedence: `--all`, then `--chain`, then custom values, then the
    /// eth-mainnet example.
    pub fn run_mode(&self) -> Result<RunMode> {
        let mode = if self.all {
            RunMode::All
        } else if let Some(id) = &self.chain {
            RunMode::Chain(get_chain(id)?)
        } else {
            match (self.bytes_per_10k, self.blocks_per_month) {
                (Some(bytes_per_10k_gb), Some(blocks_per_month)) => RunMode::Custom {
                    bytes_per_10k_gb,
                    blocks_per_month,
                },
                (Some(_), None) => {
                    warn!("--bytes-per-10k ignored without --blocks-per-month");
                    RunMode::Example
                }
                (None, Some(_)) => {
                    warn!("--blocks-per-month ignored without --bytes-per-10k");
                    RunMode::Example
                }
                (None, None) => RunMode::Example,
            }
        };

        debug!("Resolved run mode: {mode:?}");
        Ok(mode)
    }

    /// Rates from the command line, falling back to the fixed defaults
    pub fn rates(&self) -> PricingRates {
        let defaults = PricingRates::default();
        PricingRates::new(
            self.cost_per_tb.unwrap_or(defaults.cost_per_tb),
            self.cost_per_1m_blocks
                .unwrap_or(defaults.cost_per_1m_blocks),
        )
    }
}
