// This is the entry point for the pricing calculator CLI
// Everything interesting lives in the library; here I only wire it together
use log::{error, LevelFilter};
use std::process;
use substreams_pricing::{render_report, Opt};

fn main() {
    // I initialize logging at Warn level so stdout carries nothing but the report
    // RUST_LOG still overrides this when I want to see the debug records
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // I parse the command line with clap - an unknown chain or a bad number
    // makes clap print the usage message and exit before any report is built
    let opt = Opt::parse_args();

    // I run the calculation and report any error the same way the rest of my CLI does
    // If something goes wrong, I log the error and exit with code 1
    if let Err(e) = run(&opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I turn the parsed options into a report
fn run(opt: &Opt) -> substreams_pricing::Result<()> {
    // First, I resolve exactly one run mode (all, chain, custom or example)
    let mode = opt.run_mode()?;
    // Then I pick the rates, using the fixed defaults for any flag left out
    let rates = opt.rates();

    // The report is rendered as one string so nothing is printed on failure
    print!("{}", render_report(&mode, &rates));
    Ok(())
}
