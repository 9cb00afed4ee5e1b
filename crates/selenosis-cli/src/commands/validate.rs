//! Validate command

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use selenosis_compiler::HubCompiler;

use super::{hub_name, read_hubs};
use crate::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File holding one or more K8sSeleniumHub documents
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Namespace for hubs that do not set one
    #[arg(short, long, default_value = "default")]
    pub namespace: String,
}

pub fn run(args: ValidateArgs, out: &mut impl Write) -> Result<()> {
    let hubs = read_hubs(&args.file, &args.namespace)?;

    let mut failed = 0;
    for hub in &hubs {
        let result = HubCompiler::for_hub(hub).and_then(|compiler| compiler.compile());
        match result {
            Ok(_) => writeln!(out, "  {} ok", hub_name(hub))?,
            Err(e) => {
                failed += 1;
                writeln!(out, "  {} {}: {}", hub_name(hub), e.reason(), e)?;
            }
        }
    }

    if failed == 0 {
        writeln!(out, "All {} hubs valid", hubs.len())?;
        Ok(())
    } else {
        Err(crate::Error::validation(format!(
            "{} of {} hubs failed",
            failed,
            hubs.len()
        )))
    }
}
