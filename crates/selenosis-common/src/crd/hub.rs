//! K8sSeleniumHub CRD types
//!
//! A hub declares one selenosis browser grid: the router Deployment, the
//! client-facing Service and the headless Service browsers register under.

use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::browsers::BrowsersLayout;
use super::types::Condition;

/// Specification of a selenosis browser grid
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "selenium.k8s.io",
    version = "v1",
    kind = "K8sSeleniumHub",
    plural = "k8sseleniumhubs",
    shortname = "hub",
    namespaced,
    status = "K8sSeleniumHubStatus",
    printcolumn = r#"{"name":"Replicas","type":"integer","jsonPath":".spec.selenosisReplicas"}"#,
    printcolumn = r#"{"name":"Phase","type":"string","jsonPath":".status.phase"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct K8sSeleniumHubSpec {
    /// Number of selenosis replicas
    #[serde(default)]
    pub selenosis_replicas: i32,

    /// Cap on concurrently running browser sessions
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub browser_limit: String,

    /// Selenoid UI port
    #[serde(default)]
    pub selenoid_ui_port: i32,

    /// Selenosis port, shared by the container, its probes and the Service
    #[serde(default)]
    pub selenosis_port: i32,

    /// Browsers proxy port
    #[serde(default)]
    pub browsers_proxy_port: i32,

    /// Selenosis image
    pub selenosis_image: String,

    /// Selenoid UI image
    #[serde(default)]
    pub selenoid_ui_image: String,

    /// Selenoid UI adapter image
    #[serde(default)]
    pub selenoid_ui_adapter_image: String,

    /// Browsers proxy image
    #[serde(default)]
    pub browsers_proxy_image: String,

    /// Image pull secret, only needed for images in a private registry
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_pull_secret_name: String,

    /// Name of the headless Service browser pods register under
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub browsers_service_name: String,

    /// Name of the client-facing selenosis Service
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selenosis_service_name: String,

    /// Name of the selenoid UI Service
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selenoid_ui_service_name: String,

    /// Browsers layout handed to selenosis through its config map
    #[serde(default)]
    pub browsers_config: BrowsersLayout,
}

impl K8sSeleniumHubSpec {
    /// Image pull secret name, if one is configured
    pub fn image_pull_secret(&self) -> Option<&str> {
        Some(self.image_pull_secret_name.as_str()).filter(|s| !s.is_empty())
    }

    /// Whether a browser concurrency limit is configured
    pub fn has_browser_limit(&self) -> bool {
        !self.browser_limit.is_empty()
    }
}

/// Lifecycle phase of a hub
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum HubPhase {
    /// Hub has not been compiled yet
    #[default]
    Pending,
    /// Manifests were compiled from the current spec
    Compiled,
    /// The spec could not be compiled
    Failed,
}

impl std::fmt::Display for HubPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Compiled => write!(f, "Compiled"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Status for a K8sSeleniumHub
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct K8sSeleniumHubStatus {
    /// Whether the selenosis Service is ready
    #[serde(default)]
    pub selenosis_service_ready: bool,

    /// Whether the selenoid UI Service is ready
    #[serde(default)]
    pub selenoid_ui_service_ready: bool,

    /// Whether the headless browsers Service is ready
    #[serde(default)]
    pub headless_browsers_service_ready: bool,

    /// Replica count of the compiled selenosis Deployment
    #[serde(default)]
    pub selenosis_replicas: i32,

    /// Current phase
    #[serde(default)]
    pub phase: HubPhase,

    /// Human-readable message about current state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Conditions representing the hub state
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    /// Last time manifests were compiled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_compiled_at: Option<DateTime<Utc>>,

    /// Generation of the spec this status was computed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl K8sSeleniumHubStatus {
    /// Create a new status with the given phase
    pub fn with_phase(phase: HubPhase) -> Self {
        Self {
            phase,
            ..Default::default()
        }
    }

    /// Set the message and return self for chaining
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Add a condition, replacing any existing condition of the same type
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.retain(|c| c.type_ != condition.type_);
        self.conditions.push(condition);
        self
    }

    /// Set the compiled replica count
    pub fn replicas(mut self, replicas: i32) -> Self {
        self.selenosis_replicas = replicas;
        self
    }

    /// Set the last compiled timestamp
    pub fn compiled_at(mut self, time: DateTime<Utc>) -> Self {
        self.last_compiled_at = Some(time);
        self
    }

    /// Set the observed generation
    pub fn observed_generation(mut self, generation: Option<i64>) -> Self {
        self.observed_generation = generation;
        self
    }
}
