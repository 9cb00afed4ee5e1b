//! Browsers layout carried inside a K8sSeleniumHub.
//!
//! The layout is handed to selenosis through its config map. The compiler
//! never expands it; these types exist so the CRD schema describes it and
//! documents round-trip without losing fields.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{Affinity, EnvVar, HostAlias, PodDNSConfig, ResourceRequirements};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Labels and annotations applied to browser pods
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Extra pod labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Extra pod annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Meta {
    fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.annotations.is_empty()
    }
}

/// Pod-level overrides for browser pods
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodOverrides {
    /// Resource requests and limits for the browser container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    /// Extra /etc/hosts entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_aliases: Vec<HostAlias>,

    /// Environment variables for the browser container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<EnvVar>,

    /// Node selector for browser pods
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,

    /// Affinity rules for browser pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    /// DNS configuration for browser pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_config: Option<PodDNSConfig>,
}

impl PodOverrides {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A single browser version
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSpec {
    /// Browser image
    pub image: String,

    /// WebDriver path inside the browser container
    #[serde(default)]
    pub path: String,

    /// Version-specific labels and annotations
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,

    /// Version-specific pod overrides
    #[serde(default, skip_serializing_if = "PodOverrides::is_empty")]
    pub spec: PodOverrides,
}

/// Browsers layout: defaults plus per-version overrides
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowsersLayout {
    /// Pod overrides applied to every version
    #[serde(default, skip_serializing_if = "PodOverrides::is_empty")]
    pub spec: PodOverrides,

    /// Labels and annotations applied to every version
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,

    /// Default WebDriver path
    #[serde(default)]
    pub path: String,

    /// Version used when a session does not request one
    #[serde(default)]
    pub default_version: String,

    /// Browser versions keyed by version name
    #[serde(default)]
    pub versions: BTreeMap<String, BrowserSpec>,
}
