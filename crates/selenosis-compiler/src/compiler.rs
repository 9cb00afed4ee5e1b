//! HubCompiler: validate, default, build
//!
//! Single entry point for turning a hub spec into its resource set. The
//! builders are independent of each other; the first failure aborts the
//! whole pass so a caller never applies a partial set.

use selenosis_common::crd::{K8sSeleniumHub, K8sSeleniumHubSpec};
use tracing::{debug, warn};

use crate::compiled::GeneratedResources;
use crate::defaults::CompilerDefaults;
use crate::deployment::DeploymentCompiler;
use crate::error::CompilationError;
use crate::service::ServiceCompiler;
use crate::validate;

/// Compiles a hub spec into Kubernetes resources.
///
/// ```rust,ignore
/// let resources = HubCompiler::new("grid", "selenosis", &hub.spec)
///     .with_defaults(defaults)
///     .compile()?;
/// ```
pub struct HubCompiler<'a> {
    name: &'a str,
    namespace: &'a str,
    spec: &'a K8sSeleniumHubSpec,
    defaults: CompilerDefaults,
}

impl<'a> HubCompiler<'a> {
    /// Create a compiler for a hub spec with the shipped defaults.
    pub fn new(name: &'a str, namespace: &'a str, spec: &'a K8sSeleniumHubSpec) -> Self {
        Self {
            name,
            namespace,
            spec,
            defaults: CompilerDefaults::default(),
        }
    }

    /// Create a compiler from a hub object, reading name and namespace from
    /// its metadata.
    pub fn for_hub(hub: &'a K8sSeleniumHub) -> Result<Self, CompilationError> {
        let name = hub.metadata.name.as_deref().unwrap_or_default();
        let namespace = hub
            .metadata
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .ok_or_else(|| CompilationError::MissingNamespace {
                hub: name.to_string(),
            })?;
        Ok(Self::new(name, namespace, &hub.spec))
    }

    /// Override the compiler defaults.
    pub fn with_defaults(mut self, defaults: CompilerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Compile the hub spec.
    ///
    /// Runs validation → headless browsers Service → selenosis Service →
    /// Deployment, stopping at the first error.
    pub fn compile(&self) -> Result<GeneratedResources, CompilationError> {
        self.compile_inner().inspect_err(|e| {
            warn!(
                hub = self.name,
                namespace = self.namespace,
                reason = e.reason(),
                error = %e,
                "hub compilation failed"
            );
        })
    }

    fn compile_inner(&self) -> Result<GeneratedResources, CompilationError> {
        validate::validate(self.spec)?;

        let browsers_service = ServiceCompiler::compile_browsers_service(self.namespace, self.spec)?;
        let selenosis_service =
            ServiceCompiler::compile_selenosis_service(self.namespace, self.spec, &self.defaults)?;
        let deployment = DeploymentCompiler::compile(self.namespace, self.spec, &self.defaults)?;

        debug!(hub = self.name, namespace = self.namespace, "compiled hub");
        Ok(GeneratedResources {
            browsers_service,
            selenosis_service,
            deployment,
        })
    }
}
