use crate::error::{PricingError, Result};

/// Throughput profile of a single chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainProfile {
    /// Catalog identifier (e.g. "eth-mainnet")
    pub id: &'static str,
    /// Average processed data, in GB, per 10,000 blocks
    pub bytes_per_10k_gb: f64,
    /// Blocks produced per month
    pub blocks_per_month: u64,
}

impl ChainProfile {
    pub const fn new(id: &'static str, bytes_per_10k_gb: f64, blocks_per_month: u64) -> Self {
        Self {
            id,
            bytes_per_10k_gb,
            blocks_per_month,
        }
    }
}

/// Chain used when no selector is given on the command line
pub const DEFAULT_CHAIN_ID: &str = "eth-mainnet";

/// Every known chain, in report order
pub static CHAINS: [ChainProfile; 9] = [
    ChainProfile::new("eth-mainnet", 1.1, 216_000),
    ChainProfile::new("bsc", 0.284, 5_760_000),
    ChainProfile::new("polygon", 2.5, 1_296_000),
    ChainProfile::new("arbitrum", 0.8, 6_480_000),
    ChainProfile::new("optimism", 0.4, 1_296_000),
    ChainProfile::new("base", 1.9, 1_296_000),
    ChainProfile::new("avalanche", 1.0, 1_296_000),
    ChainProfile::new("unichain", 0.040, 2_592_000),
    ChainProfile::new("hypercore", 0.028, 12_960_000),
];

/// Ordered view of the whole catalog
pub fn all_chains() -> &'static [ChainProfile] {
    &CHAINS
}

/// Look up a chain by identifier
pub fn find_chain(id: &str) -> Option<&'static ChainProfile> {
    CHAINS.iter().find(|chain| chain.id == id)
}

/// Look up a chain, failing with `UnknownChain` when it is not in the catalog
pub fn get_chain(id: &str) -> Result<&'static ChainProfile> {
    find_chain(id).ok_or_else(|| PricingError::UnknownChain(id.to_string()))
}

/// Identifiers in catalog order
pub fn chain_ids() -> Vec<&'static str> {
    CHAINS.iter().map(|chain| chain.id).collect()
}

/// The eth-mainnet profile used by example mode
pub fn default_chain() -> &'static ChainProfile {
    &CHAINS[0]
}
