//! Pricing constants and rate handling
//!
//! Costs scale linearly with two quantities:
//! - **Data**: currency units per terabyte processed per month
//! - **Blocks**: currency units per million blocks processed per month
//!
//! Data volumes use decimal units (1 TB = 1,000 GB).

/// Default cost per terabyte per month
pub const DEFAULT_COST_PER_TB: f64 = 150.00;

/// Default cost per million blocks per month
pub const DEFAULT_COST_PER_1M_BLOCKS: f64 = 1.75;

/// Blocks covered by a single throughput sample
pub const BLOCKS_PER_SAMPLE: f64 = 10_000.0;

/// Gigabytes in a terabyte
pub const GB_PER_TB: f64 = 1_000.0;

/// Block count unit for the block rate
pub const BLOCKS_PER_RATE_UNIT: f64 = 1_000_000.0;

/// Linear pricing rates applied to a chain profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRates {
    pub cost_per_tb: f64,
    pub cost_per_1m_blocks: f64,
}

impl PricingRates {
    pub fn new(cost_per_tb: f64, cost_per_1m_blocks: f64) -> Self {
        Self {
            cost_per_tb,
            cost_per_1m_blocks,
        }
    }
}

impl Default for PricingRates {
    fn default() -> Self {
        Self::new(DEFAULT_COST_PER_TB, DEFAULT_COST_PER_1M_BLOCKS)
    }
}

/// Parsing helpers for command-line values
pub mod validation {
    use crate::error::{PricingError, Result};

    /// Parse a finite, non-negative real
    pub fn parse_non_negative_f64(s: &str) -> Result<f64> {
        let value: f64 = s.trim().parse()?;
        if !value.is_finite() {
            return Err(PricingError::InvalidArgument(format!(
                "{s} is not a finite number"
            )));
        }
        if value < 0.0 {
            return Err(PricingError::InvalidArgument(format!(
                "{s} must not be negative"
            )));
        }
        Ok(value)
    }

    /// Parse a block count
    pub fn parse_block_count(s: &str) -> Result<u64> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(PricingError::InvalidArgument(format!(
                "{s} must not be negative"
            )));
        }
        Ok(trimmed.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = PricingRates::default();
        assert_eq!(rates.cost_per_tb, 150.0);
        assert_eq!(rates.cost_per_1m_blocks, 1.75);
    }

    #[test]
    fn test_parse_non_negative_f64() {
        assert_eq!(parse_non_negative_f64("120").unwrap(), 120.0);
        assert_eq!(parse_non_negative_f64(" 1.5 ").unwrap(), 1.5);
        assert_eq!(parse_non_negative_f64("0").unwrap(), 0.0);

        assert!(parse_non_negative_f64("-1").is_err());
        assert!(parse_non_negative_f64("NaN").is_err());
        assert!(parse_non_negative_f64("inf").is_err());
        assert!(parse_non_negative_f64("ten").is_err());
    }

    #[test]
    fn test_parse_block_count() {
        assert_eq!(parse_block_count("219000").unwrap(), 219_000);
        assert_eq!(parse_block_count("0").unwrap(), 0);

        let err = parse_block_count("-5").unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
        assert!(parse_block_count("1.5").is_err());
        assert!(parse_block_count("").is_err());
    }
}
