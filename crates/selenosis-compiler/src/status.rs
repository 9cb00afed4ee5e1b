//! Status derivation for a compilation pass
//!
//! The reconciler owns the readiness flags; compilation only reports whether
//! the current spec produced a resource set.

use chrono::Utc;
use selenosis_common::crd::{Condition, ConditionStatus, HubPhase, K8sSeleniumHubStatus};

use crate::compiled::GeneratedResources;
use crate::error::CompilationError;

/// Condition type set by every compilation pass
pub const CONDITION_COMPILED: &str = "Compiled";

/// Status after a successful pass.
pub fn compiled(resources: &GeneratedResources, generation: Option<i64>) -> K8sSeleniumHubStatus {
    let now = Utc::now();
    let replicas = i32::try_from(resources.deployment.spec.replicas).unwrap_or(i32::MAX);

    K8sSeleniumHubStatus::with_phase(HubPhase::Compiled)
        .message("Manifests compiled")
        .replicas(replicas)
        .condition(Condition::new(
            CONDITION_COMPILED,
            ConditionStatus::True,
            CONDITION_COMPILED,
            format!("compiled {} resources", resources.resources().len()),
        ))
        .compiled_at(now)
        .observed_generation(generation)
}

/// Status after a failed pass. The error text becomes the condition message.
pub fn failed(error: &CompilationError, generation: Option<i64>) -> K8sSeleniumHubStatus {
    K8sSeleniumHubStatus::with_phase(HubPhase::Failed)
        .message(error.to_string())
        .condition(Condition::new(
            CONDITION_COMPILED,
            ConditionStatus::False,
            error.reason(),
            error.to_string(),
        ))
        .observed_generation(generation)
}
