//! selenosis-hub CLI library

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};
use selenosis_common::telemetry::LogFormat;

/// Selenosis hub compiler
#[derive(Parser, Debug)]
#[command(name = "selenosis-hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format (pretty or json)
    #[arg(
        long,
        global = true,
        env = "SELENOSIS_LOG_FORMAT",
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the K8sSeleniumHub CustomResourceDefinition
    Crd,
    /// Compile hub documents and print the generated manifests
    Render(commands::render::RenderArgs),
    /// Compile hub documents and report which ones fail
    Validate(commands::validate::ValidateArgs),
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        match self.command {
            Commands::Crd => commands::crd::run(&mut stdout),
            Commands::Render(args) => commands::render::run(args, &mut stdout),
            Commands::Validate(args) => commands::validate::run(args, &mut stdout),
        }
    }
}
