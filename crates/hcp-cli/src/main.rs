//! hcp-ingress CLI
//!
//! Renders the desired hosted cluster ingress objects as YAML.

use clap::Parser;

use hcp_cli::{Cli, Result};
use hcp_common::telemetry::{init_tracing, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(TelemetryConfig {
        format: cli.log_format,
        ..Default::default()
    })?;

    cli.run()
}
