//! Compilation error types
//!
//! Each variant names the rule that failed and carries the offending value,
//! so the message can go straight onto the hub's status condition.

use thiserror::Error;

/// Errors that can occur while compiling a hub spec
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompilationError {
    /// Neither a replica count nor a browser limit was given
    #[error(
        "unable to create selenosis deployment with {replicas} replicas and no browser limit: \
         set spec.selenosisReplicas > 0 or spec.browserLimit"
    )]
    InvalidCapacity {
        /// The replica count that was rejected
        replicas: i32,
    },

    /// Service port outside 1..=65535
    #[error("unable to create {resource} with port {port}: spec.selenosisPort must be between 1 and 65535")]
    InvalidPort {
        /// Resource being built when the port was rejected
        resource: &'static str,
        /// The port that was rejected
        port: i32,
    },

    /// A service name required by the resource is empty
    #[error("unable to create {resource} with an empty service name: set spec.{field}")]
    MissingServiceName {
        /// Resource being built
        resource: &'static str,
        /// Spec field that must be set
        field: &'static str,
    },

    /// The hub object carries no namespace
    #[error("hub '{hub}' has no namespace")]
    MissingNamespace {
        /// Name of the hub
        hub: String,
    },
}

impl CompilationError {
    /// Machine-readable reason, used as the status condition reason
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCapacity { .. } => "InvalidCapacity",
            Self::InvalidPort { .. } => "InvalidPort",
            Self::MissingServiceName { .. } => "MissingServiceName",
            Self::MissingNamespace { .. } => "MissingNamespace",
        }
    }

    /// Spec field at fault, if the error maps to one
    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidCapacity { .. } => Some("spec.selenosisReplicas".to_string()),
            Self::InvalidPort { .. } => Some("spec.selenosisPort".to_string()),
            Self::MissingServiceName { field, .. } => Some(format!("spec.{}", field)),
            Self::MissingNamespace { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_capacity_mentions_replica_count() {
        let err = CompilationError::InvalidCapacity { replicas: 0 };
        let msg = err.to_string();
        assert!(msg.contains("0 replicas"));
        assert!(msg.contains("browser limit"));
        assert_eq!(err.reason(), "InvalidCapacity");
    }

    #[test]
    fn invalid_port_mentions_port_and_resource() {
        let err = CompilationError::InvalidPort {
            resource: "selenosis service",
            port: -1,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("selenosis service"));
        assert_eq!(err.field().as_deref(), Some("spec.selenosisPort"));
    }

    #[test]
    fn missing_service_name_points_at_field() {
        let err = CompilationError::MissingServiceName {
            resource: "browsers headless service",
            field: "browsersServiceName",
        };
        assert!(err.to_string().contains("spec.browsersServiceName"));
        assert_eq!(err.reason(), "MissingServiceName");
        assert_eq!(err.field().as_deref(), Some("spec.browsersServiceName"));
    }

    #[test]
    fn missing_namespace_has_no_field() {
        let err = CompilationError::MissingNamespace {
            hub: "grid".to_string(),
        };
        assert!(err.to_string().contains("grid"));
        assert!(err.field().is_none());
    }
}
