//! Core pricing functionality
//!
//! This module contains the chain profile catalog, the pricing rates and
//! the cost formula that turns one into a monthly cost breakdown.

pub mod chains;
pub mod cost;
pub mod pricing;

pub use chains::{all_chains, chain_ids, default_chain, find_chain, get_chain, ChainProfile};
pub use cost::{calculate_cost, chain_cost, CostBreakdown, CostSummary, SummaryRow};
pub use pricing::{PricingRates, DEFAULT_COST_PER_1M_BLOCKS, DEFAULT_COST_PER_TB};
