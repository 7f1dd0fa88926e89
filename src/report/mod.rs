//! Text reports
//!
//! Renders cost breakdowns and the multi-chain summary as aligned text.
//! Everything here returns `String`s; printing is left to the binary.

pub mod format;
pub mod render;

pub use format::{format_count, format_grouped, format_usd, format_volume};
pub use render::{render_chain, render_header, render_report, render_summary};
