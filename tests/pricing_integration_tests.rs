//! Pricing integration tests
//!
//! Drives the library API end to end and runs the compiled binary to check
//! the command-line contract: run mode selection, exit codes and output.

use std::process::{Command, Output};
use substreams_pricing::{
    all_chains, chain_cost, format_usd, get_chain, render_report, CostSummary, PricingRates,
    RunMode,
};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_substreams-pricing"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run substreams-pricing")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_grand_total_matches_individual_totals() {
    let rates = PricingRates::default();
    let summary = CostSummary::new(all_chains(), &rates);

    assert_eq!(summary.len(), 9);
    let individual: f64 = all_chains()
        .iter()
        .map(|chain| chain_cost(chain, &rates).total)
        .sum();
    assert!((summary.grand_total - individual).abs() < 1e-9);

    let report = render_report(&RunMode::All, &rates);
    assert!(report.contains(&format_usd(summary.grand_total)));
}

#[test]
fn test_library_report_for_named_chain() {
    let arbitrum = get_chain("arbitrum").unwrap();
    let report = render_report(&RunMode::Chain(arbitrum), &PricingRates::default());

    // 0.8 GB * 648 = 518.4 GB; 0.5184 TB * 150 = 77.76; 6.48 * 1.75 = 11.34
    assert!(report.contains("  Monthly data           518.4 GB  (0.518 TB)"));
    assert!(report.contains("  Bytes cost             $77.76"));
    assert!(report.contains("  Blocks cost            $11.34"));
    assert!(report.contains("  Total / month          $89.10"));
}

#[test]
fn test_cli_named_chain() {
    let output = run_cli(&["--chain", "eth-mainnet"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("  Rate: $150.00/TB   $1.75/1M blocks"));
    assert!(stdout.contains("  Chain                  eth-mainnet"));
    assert!(stdout.contains("  Total / month          $3.94"));
    assert!(!stdout.contains("Usage:"));
}

#[test]
fn test_cli_unknown_chain_fails_without_report() {
    let output = run_cli(&["--chain", "unknown-id"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown chain: unknown-id"));
    assert!(stderr.contains("hypercore"));
}

#[test]
fn test_cli_unparseable_number_fails() {
    let output = run_cli(&["--cost-per-tb", "lots"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_cli_partial_custom_input_falls_back_to_example() {
    for args in [
        ["--bytes-per-10k", "5.0"].as_slice(),
        ["--blocks-per-month", "219000"].as_slice(),
    ] {
        let output = run_cli(args);
        assert!(output.status.success());

        let stdout = stdout_of(&output);
        assert!(stdout.contains("No chain specified"));
        assert!(stdout.contains("  Chain                  eth-mainnet"));
        assert!(!stdout.contains("custom"));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ignored without"));
    }
}

#[test]
fn test_cli_custom_profile() {
    let output = run_cli(&["--bytes-per-10k", "1.1", "--blocks-per-month", "219000"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("  Chain                  custom"));
    assert!(stdout.contains("  Blocks / month         219,000"));
}

#[test]
fn test_cli_all_with_zero_rates() {
    let output = run_cli(&["--all", "--cost-per-tb", "0", "--cost-per-1m-blocks", "0"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("  Rate: $0.00/TB   $0.00/1M blocks"));
    assert_eq!(stdout.matches("  Total / month          $0.00").count(), 9);

    let total_line = stdout
        .lines()
        .find(|line| line.starts_with("  TOTAL"))
        .expect("summary total row");
    assert!(total_line.ends_with("$0.00"));
}

#[test]
fn test_cli_all_lists_chains_in_catalog_order() {
    let output = run_cli(&["--all"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let positions: Vec<usize> = all_chains()
        .iter()
        .map(|chain| {
            stdout
                .find(&format!("  Chain                  {}\n", chain.id))
                .expect("chain block present")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_cli_rates_ignore_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_substreams-pricing"))
        .args(["--chain", "bsc"])
        .env("SUBSTREAMS_COST_PER_TB", "999")
        .env("SUBSTREAMS_COST_PER_1M_BLOCKS", "9")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run substreams-pricing");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("  Rate: $150.00/TB   $1.75/1M blocks"));
    assert!(!stdout.contains("$999.00"));
}

#[test]
fn test_cli_large_volume_prints_terabytes_without_separators() {
    let output = run_cli(&["--bytes-per-10k", "100", "--blocks-per-month", "1000000000"]);
    assert!(output.status.success());

    // 100 GB * 100,000 = 10,000,000 GB
    let stdout = stdout_of(&output);
    assert!(stdout.contains("  Monthly data           10,000,000.0 GB  (10000.000 TB)"));
}
