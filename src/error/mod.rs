//! Error handling for the pricing calculator
//!
//! Computation itself never fails; every error here comes from user input.

use std::fmt;

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Error types for the pricing calculator
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Chain identifier not present in the catalog
    UnknownChain(String),
    /// Unparseable or out-of-range command-line value
    InvalidArgument(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::UnknownChain(id) => write!(
                f,
                "Unknown chain: {id}. Valid options: {}",
                crate::core::chains::chain_ids().join(", ")
            ),
            PricingError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<std::num::ParseFloatError> for PricingError {
    fn from(err: std::num::ParseFloatError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

impl From<std::num::ParseIntError> for PricingError {
    fn from(err: std::num::ParseIntError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}
