//! Render command

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use selenosis_common::yaml::to_yaml_stream;
use selenosis_compiler::{CompilerDefaults, HubCompiler};
use tracing::info;

use super::{hub_name, read_hubs};
use crate::Result;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File holding one or more K8sSeleniumHub documents
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Namespace for hubs that do not set one
    #[arg(short, long, default_value = "default")]
    pub namespace: String,

    /// NodePort for the selenosis LoadBalancer Service
    #[arg(long, env = "SELENOSIS_NODE_PORT")]
    pub node_port: Option<u16>,

    /// ConfigMap holding the browsers config
    #[arg(long, env = "SELENOSIS_CONFIG_MAP")]
    pub config_map: Option<String>,
}

impl RenderArgs {
    fn defaults(&self) -> CompilerDefaults {
        let mut defaults = CompilerDefaults::default();
        if let Some(port) = self.node_port {
            defaults = defaults.with_node_port(port);
        }
        if let Some(ref name) = self.config_map {
            defaults = defaults.with_config_map(name.clone());
        }
        defaults
    }
}

pub fn run(args: RenderArgs, out: &mut impl Write) -> Result<()> {
    let hubs = read_hubs(&args.file, &args.namespace)?;
    let defaults = args.defaults();

    let mut manifests = Vec::new();
    for hub in &hubs {
        let compiled = HubCompiler::for_hub(hub)?
            .with_defaults(defaults.clone())
            .compile()?;
        info!(hub = hub_name(hub), "rendered hub");
        manifests.extend(compiled.resources());
    }

    out.write_all(to_yaml_stream(&manifests)?.as_bytes())?;
    Ok(())
}
