use crate::cli::RunMode;
use crate::core::chains::all_chains;
use crate::core::cost::{calculate_cost, CostBreakdown, CostSummary};
use crate::core::pricing::PricingRates;
use crate::report::format::{format_count, format_grouped, format_usd, format_volume};

/// Width of the `=` and `-` rules
pub const RULE_WIDTH: usize = 50;

/// Column width of the labels in a chain block
pub const LABEL_WIDTH: usize = 22;

const TITLE: &str = "Substreams EVM Pricing Calculator";
const BIN_NAME: &str = "substreams-pricing";

/// Lines of text joined into a report
#[derive(Debug, Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    fn label(&mut self, label: &str, value: impl AsRef<str>) {
        self.push(format!(
            "  {label:<width$} {}",
            value.as_ref(),
            width = LABEL_WIDTH
        ));
    }

    fn extend(&mut self, other: Lines) {
        self.0.extend(other.0);
    }

    fn finish(self) -> String {
        let mut out = self.0.join("\n");
        out.push('\n');
        out
    }
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn header_lines(rates: &PricingRates) -> Lines {
    let mut lines = Lines::default();
    lines.blank();
    lines.push(rule('='));
    lines.push(format!("  {TITLE}"));
    lines.push(rule('='));
    lines.push(format!(
        "  Rate: {}/TB   {}/1M blocks",
        format_usd(rates.cost_per_tb),
        format_usd(rates.cost_per_1m_blocks)
    ));
    lines.push(rule('='));
    lines.blank();
    lines
}

fn chain_lines(
    name: &str,
    bytes_per_10k_gb: f64,
    blocks_per_month: u64,
    cost: &CostBreakdown,
) -> Lines {
    let mut lines = Lines::default();
    lines.label("Chain", name);
    lines.label(
        "Bytes / 10k blocks",
        format!("{} GB", format_volume(bytes_per_10k_gb)),
    );
    lines.label("Blocks / month", format_count(blocks_per_month));
    lines.label(
        "Monthly data",
        format!(
            "{} GB  ({:.3} TB)",
            format_grouped(cost.monthly_gb, 1),
            cost.monthly_tb
        ),
    );
    lines.label("Bytes cost", format_usd(cost.bytes_cost));
    lines.label("Blocks cost", format_usd(cost.blocks_cost));
    lines.label("Total / month", format_usd(cost.total));
    lines.blank();
    lines
}

fn summary_lines(summary: &CostSummary) -> Lines {
    let separator = format!(
        "  {} {} {} {} {}",
        "-".repeat(16),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(10)
    );

    let mut lines = Lines::default();
    lines.blank();
    lines.push(format!(
        "  {:<16} {:>10} {:>10} {:>10} {:>10}",
        "Chain", "Data/mo", "Bytes $", "Blocks $", "Total $"
    ));
    lines.push(separator.clone());
    for row in &summary.rows {
        lines.push(format!(
            "  {:<16} {:>8}GB {:>10} {:>10} {:>10}",
            row.chain.id,
            format_grouped(row.cost.monthly_gb, 1),
            format_usd(row.cost.bytes_cost),
            format_usd(row.cost.blocks_cost),
            format_usd(row.cost.total)
        ));
    }
    lines.push(separator);
    lines.push(format!(
        "  {:<16} {:>10} {:>10} {:>10} {:>10}",
        "TOTAL",
        "",
        "",
        "",
        format_usd(summary.grand_total)
    ));
    lines.blank();
    lines
}

fn usage_lines() -> Lines {
    let mut lines = Lines::default();
    lines.push("  Usage:");
    for args in [
        "--chain eth-mainnet",
        "--bytes-per-10k 1.1 --blocks-per-month 219000",
        "--all",
        "--all --cost-per-tb 120 --cost-per-1m-blocks 1.50",
    ] {
        lines.push(format!("    {BIN_NAME} {args}"));
    }
    lines.blank();
    lines
}

/// Banner showing the rates in effect
pub fn render_header(rates: &PricingRates) -> String {
    header_lines(rates).finish()
}

/// Labeled breakdown for one chain
pub fn render_chain(
    name: &str,
    bytes_per_10k_gb: f64,
    blocks_per_month: u64,
    cost: &CostBreakdown,
) -> String {
    chain_lines(name, bytes_per_10k_gb, blocks_per_month, cost).finish()
}

/// Summary table with the grand total
pub fn render_summary(summary: &CostSummary) -> String {
    summary_lines(summary).finish()
}

/// Full report for a resolved run mode
pub fn render_report(mode: &RunMode, rates: &PricingRates) -> String {
    let mut lines = header_lines(rates);

    match mode {
        RunMode::All => {
            let summary = CostSummary::new(all_chains(), rates);
            for row in &summary.rows {
                lines.extend(chain_lines(
                    row.chain.id,
                    row.chain.bytes_per_10k_gb,
                    row.chain.blocks_per_month,
                    &row.cost,
                ));
                lines.push(rule('-'));
            }
            lines.extend(summary_lines(&summary));
        }
        RunMode::Example => {
            lines.push("  No chain specified, showing Eth Mainnet example:");
            lines.blank();
            lines.extend(single_chain_lines(mode, rates));
            lines.extend(usage_lines());
        }
        RunMode::Chain(_) | RunMode::Custom { .. } => {
            lines.extend(single_chain_lines(mode, rates));
        }
    }

    lines.finish()
}

fn single_chain_lines(mode: &RunMode, rates: &PricingRates) -> Lines {
    match mode.single_profile() {
        Some((name, bytes_per_10k_gb, blocks_per_month)) => {
            let cost = calculate_cost(bytes_per_10k_gb, blocks_per_month as f64, rates);
            chain_lines(name, bytes_per_10k_gb, blocks_per_month, &cost)
        }
        None => Lines::default(),
    }
}
