//! hcp-ingress CLI library

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};

use hcp_common::telemetry::LogFormat;

/// Hosted control plane ingress renderer
///
/// Computes the objects a hosted control plane would create for guest
/// cluster ingress and prints them as YAML. Nothing is applied to a cluster.
#[derive(Parser, Debug)]
#[command(name = "hcp-ingress")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log line format (json or text); logs go to stderr
    #[arg(
        long,
        global = true,
        env = "HCP_LOG_FORMAT",
        default_value = "text",
        value_parser = parse_log_format
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the guest cluster default IngressController
    IngressController(commands::ingress_controller::IngressControllerArgs),
    /// Render the KubeVirt ingress passthrough Service
    PassthroughService(commands::passthrough_service::PassthroughServiceArgs),
    /// Decode a "namespace/name" reference
    ParseName(commands::parse_name::ParseNameArgs),
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::IngressController(args) => commands::ingress_controller::run(args),
            Commands::PassthroughService(args) => commands::passthrough_service::run(args),
            Commands::ParseName(args) => commands::parse_name::run(args),
        }
    }
}

fn parse_log_format(s: &str) -> std::result::Result<LogFormat, String> {
    s.parse().map_err(|e: hcp_common::telemetry::TelemetryError| e.to_string())
}
