use crate::core::chains::ChainProfile;
use crate::core::pricing::{BLOCKS_PER_RATE_UNIT, BLOCKS_PER_SAMPLE, GB_PER_TB, PricingRates};
use log::debug;

/// Monthly cost of processing one chain at a given set of rates
///
/// No rounding is applied; values are rounded only when rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub monthly_gb: f64,
    pub monthly_tb: f64,
    pub bytes_cost: f64,
    pub blocks_cost: f64,
    pub total: f64,
}

/// Total GB processed per month
pub fn monthly_data_gb(bytes_per_10k_gb: f64, blocks_per_month: f64) -> f64 {
    bytes_per_10k_gb * (blocks_per_month / BLOCKS_PER_SAMPLE)
}

/// Apply `rates` to a throughput profile
pub fn calculate_cost(
    bytes_per_10k_gb: f64,
    blocks_per_month: f64,
    rates: &PricingRates,
) -> CostBreakdown {
    let monthly_gb = monthly_data_gb(bytes_per_10k_gb, blocks_per_month);
    let monthly_tb = monthly_gb / GB_PER_TB;

    let bytes_cost = monthly_tb * rates.cost_per_tb;
    let blocks_cost = (blocks_per_month / BLOCKS_PER_RATE_UNIT) * rates.cost_per_1m_blocks;

    CostBreakdown {
        monthly_gb,
        monthly_tb,
        bytes_cost,
        blocks_cost,
        total: bytes_cost + blocks_cost,
    }
}

/// Cost of a catalog profile
pub fn chain_cost(chain: &ChainProfile, rates: &PricingRates) -> CostBreakdown {
    let breakdown = calculate_cost(chain.bytes_per_10k_gb, chain.blocks_per_month as f64, rates);
    debug!(
        "Computed cost for {}: {:.1} GB, total {:.4}",
        chain.id, breakdown.monthly_gb, breakdown.total
    );
    breakdown
}

/// One row of a multi-chain summary
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub chain: &'static ChainProfile,
    pub cost: CostBreakdown,
}

/// Per-chain costs for a list of chains plus their grand total
#[derive(Debug, Clone)]
pub struct CostSummary {
    pub rows: Vec<SummaryRow>,
    pub grand_total: f64,
}

impl CostSummary {
    /// Compute every chain's cost, keeping the input order
    pub fn new(chains: &'static [ChainProfile], rates: &PricingRates) -> Self {
        let rows: Vec<SummaryRow> = chains
            .iter()
            .map(|chain| SummaryRow {
                chain,
                cost: chain_cost(chain, rates),
            })
            .collect();
        let grand_total: f64 = rows.iter().map(|row| row.cost.total).sum();

        debug!("Summarized {} chains, grand total {grand_total:.4}", rows.len());
        Self { rows, grand_total }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
