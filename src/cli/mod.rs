//! Command-line interface
//!
//! This module contains the argument parsing and the resolution of the
//! parsed options into a single run mode.

pub mod commands;
pub mod mode;

pub use commands::Opt;
pub use mode::{RunMode, CUSTOM_CHAIN_NAME};
