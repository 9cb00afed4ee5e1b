//! Spec-to-manifest compiler for selenosis browser grids
//!
//! Compiles a `K8sSeleniumHubSpec` into the Kubernetes resources that run the
//! grid: the selenosis Deployment, the client-facing Service and the headless
//! Service browser pods register under. Compilation is pure: no I/O, no
//! shared state, and the same spec always yields the same manifests.
//!
//! # Usage
//!
//! ```rust,ignore
//! let resources = HubCompiler::for_hub(&hub)?
//!     .with_defaults(CompilerDefaults::default())
//!     .compile()?;
//! for manifest in resources.resources() {
//!     // hand off to server-side apply
//! }
//! ```

mod compiled;
mod compiler;
pub mod defaults;
pub mod deployment;
pub mod error;
pub mod helpers;
pub mod k8s;
pub mod service;
pub mod status;
pub mod validate;

pub use compiled::{GeneratedResources, Resource};
pub use compiler::HubCompiler;
pub use defaults::{CompilerDefaults, ProbePolicy, RollingUpdatePolicy};
pub use deployment::DeploymentCompiler;
pub use error::CompilationError;
pub use service::ServiceCompiler;
