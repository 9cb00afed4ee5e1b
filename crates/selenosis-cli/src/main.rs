//! selenosis-hub
//!
//! Renders and validates K8sSeleniumHub resources offline.

use clap::Parser;

use selenosis_cli::{Cli, Result};
use selenosis_common::telemetry::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;
    cli.run()
}
