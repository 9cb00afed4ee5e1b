//! Canonical metadata for generated resources
//!
//! Every manifest the compiler emits carries this metadata. Construction
//! stamps the managed-by label so generated objects can be told apart from
//! hand-written ones in the same namespace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{LABEL_MANAGED_BY, LABEL_MANAGED_BY_SELENOSIS};

/// Standard Kubernetes ObjectMeta for compiled resources.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Resource name
    pub name: String,
    /// Resource namespace
    pub namespace: String,
    /// Labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Create new metadata with the managed-by label set
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(
            LABEL_MANAGED_BY.to_string(),
            LABEL_MANAGED_BY_SELENOSIS.to_string(),
        );
        Self {
            name: name.into(),
            namespace: namespace.into(),
            labels,
            annotations: BTreeMap::new(),
        }
    }
}
