//! Runs a few arithmetic helpers in bounded loops, then busy-loops for a
//! caller-controlled number of iterations.

#![forbid(unsafe_code)]

mod arith;
mod logging;
mod loop_count;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Number of busy-loop iterations to run. Defaults to 65535 if not
    /// specified. A value that doesn't start with a digit counts as zero.
    count: Option<String>,

    /// Log the intermediate arithmetic to stderr.
    #[clap(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    for i in 0..10 {
        let value = arith::accumulate(i);
        log::debug!("accumulate({i}) = {value}");
    }
    log::debug!("series sum = {}", arith::sum_series());
    let count = loop_count::loop_count(args.count.as_deref());
    log::debug!("spinning for {count} iterations");
    spin(count);
    Ok(())
}

/// Spins for `count` iterations doing no work besides the loop itself.
fn spin(count: u32) {
    for _ in 0..count {
        std::hint::spin_loop();
    }
}
