use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;

use dispatch_bench::cli::{execute_full_scale, Cli};

fn main() -> Result<()> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let timings = execute_full_scale()?;
    debug!("Collected {} timings", timings.len());

    Ok(())
}
