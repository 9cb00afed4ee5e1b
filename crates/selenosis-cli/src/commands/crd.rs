//! Crd command

use std::io::Write;

use kube::CustomResourceExt;
use selenosis_common::crd::K8sSeleniumHub;

use crate::Result;

pub fn run(out: &mut impl Write) -> Result<()> {
    let crd = serde_yaml::to_string(&K8sSeleniumHub::crd())?;
    writeln!(out, "{crd}")?;
    Ok(())
}
