use crate::core::chains::{default_chain, ChainProfile};

/// Label used for custom profiles in reports
pub const CUSTOM_CHAIN_NAME: &str = "custom";

/// What a single invocation reports on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunMode {
    /// Every catalog entry plus a summary table
    All,
    /// One catalog entry
    Chain(&'static ChainProfile),
    /// A profile given on the command line
    Custom {
        bytes_per_10k_gb: f64,
        blocks_per_month: u64,
    },
    /// The eth-mainnet profile followed by a usage hint
    Example,
}

impl RunMode {
    /// Name and profile values of the single chain this mode prices
    ///
    /// Returns `None` for `All`, which prices the whole catalog.
    pub fn single_profile(&self) -> Option<(&'static str, f64, u64)> {
        match self {
            RunMode::All => None,
            RunMode::Chain(chain) => {
                Some((chain.id, chain.bytes_per_10k_gb, chain.blocks_per_month))
            }
            RunMode::Custom {
                bytes_per_10k_gb,
                blocks_per_month,
            } => Some((CUSTOM_CHAIN_NAME, *bytes_per_10k_gb, *blocks_per_month)),
            RunMode::Example => {
                let chain = default_chain();
                Some((chain.id, chain.bytes_per_10k_gb, chain.blocks_per_month))
            }
        }
    }
}
