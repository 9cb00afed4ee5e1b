//! Compiled hub output types

use serde::Serialize;

use crate::k8s::{Deployment, Service};

/// A single generated manifest
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Resource {
    /// apps/v1 Deployment
    Deployment(Deployment),
    /// core/v1 Service
    Service(Service),
}

impl Resource {
    /// Resource kind
    pub fn kind(&self) -> &str {
        match self {
            Self::Deployment(d) => &d.kind,
            Self::Service(s) => &s.kind,
        }
    }

    /// Resource name
    pub fn name(&self) -> &str {
        match self {
            Self::Deployment(d) => &d.metadata.name,
            Self::Service(s) => &s.metadata.name,
        }
    }

    /// Resource namespace
    pub fn namespace(&self) -> &str {
        match self {
            Self::Deployment(d) => &d.metadata.namespace,
            Self::Service(s) => &s.metadata.namespace,
        }
    }
}

/// Every resource compiled from one hub spec.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedResources {
    /// Headless Service for browser pod discovery
    pub browsers_service: Service,
    /// Client-facing selenosis Service
    pub selenosis_service: Service,
    /// Selenosis Deployment
    pub deployment: Deployment,
}

impl GeneratedResources {
    /// All resources in apply order: Services first, then the Deployment.
    pub fn resources(&self) -> Vec<Resource> {
        vec![
            Resource::Service(self.browsers_service.clone()),
            Resource::Service(self.selenosis_service.clone()),
            Resource::Deployment(self.deployment.clone()),
        ]
    }
}
