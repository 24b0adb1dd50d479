//! CLI entry point for the `hashring` driver.

use clap::Parser;
use hashring_cli::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    config.run()
}
