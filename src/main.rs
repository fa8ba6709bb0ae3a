//! `ooler-ctrl`: issue a single BLE command to an Ooler and print the result.
//!
//! ```text
//! ooler-ctrl --MAC AA:BB:CC:DD:EE:FF power --state auto
//! ooler-ctrl --MAC AA:BB:CC:DD:EE:FF target_temp --temp 68
//! ooler-ctrl --MAC AA:BB:CC:DD:EE:FF target_temp
//! ```

use clap::Parser;
use ooler_ctrl::{Cli, Ooler, Result};
use tracing_subscriber::EnvFilter;

// One device call at a time, so one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let ooler = Ooler::new(cli.address).with_scan_timeout(cli.scan_timeout());

    let reading = ooler_ctrl::run(&ooler, &cli.command).await?;

    println!("{}", reading);

    Ok(())
}
