//! Validator: rejects specs that cannot yield a coherent resource set
//!
//! Every check returns the first violated rule; nothing is aggregated.

use selenosis_common::crd::K8sSeleniumHubSpec;

use crate::error::CompilationError;

/// Rules 1 and 2: capacity and port, checked before any builder runs.
pub fn validate(spec: &K8sSeleniumHubSpec) -> Result<(), CompilationError> {
    validate_capacity(spec)?;
    validate_port(spec, "selenosis deployment")?;
    Ok(())
}

/// The grid needs a replica count or a browser limit.
pub fn validate_capacity(spec: &K8sSeleniumHubSpec) -> Result<(), CompilationError> {
    if spec.selenosis_replicas <= 0 && !spec.has_browser_limit() {
        return Err(CompilationError::InvalidCapacity {
            replicas: spec.selenosis_replicas,
        });
    }
    Ok(())
}

/// The selenosis port must be a valid TCP port. Returns it narrowed to `u16`.
pub fn validate_port(
    spec: &K8sSeleniumHubSpec,
    resource: &'static str,
) -> Result<u16, CompilationError> {
    match u16::try_from(spec.selenosis_port) {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(CompilationError::InvalidPort {
            resource,
            port: spec.selenosis_port,
        }),
    }
}

/// Rule 3: a service name required by `resource` must not be empty.
pub fn require_service_name<'a>(
    name: &'a str,
    resource: &'static str,
    field: &'static str,
) -> Result<&'a str, CompilationError> {
    if name.is_empty() {
        return Err(CompilationError::MissingServiceName { resource, field });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(replicas: i32, limit: &str, port: i32) -> K8sSeleniumHubSpec {
        K8sSeleniumHubSpec {
            selenosis_replicas: replicas,
            browser_limit: limit.to_string(),
            selenosis_port: port,
            ..Default::default()
        }
    }

    #[test]
    fn replicas_alone_are_enough_capacity() {
        assert!(validate_capacity(&spec(1, "", 4444)).is_ok());
    }

    #[test]
    fn browser_limit_substitutes_for_replicas() {
        assert!(validate_capacity(&spec(0, "10", 4444)).is_ok());
        assert!(validate_capacity(&spec(-3, "10", 4444)).is_ok());
    }

    #[test]
    fn no_capacity_is_rejected_with_count() {
        assert_eq!(
            validate_capacity(&spec(0, "", 4444)),
            Err(CompilationError::InvalidCapacity { replicas: 0 })
        );
        assert_eq!(
            validate_capacity(&spec(-2, "", 4444)),
            Err(CompilationError::InvalidCapacity { replicas: -2 })
        );
    }

    #[test]
    fn port_must_be_positive() {
        for port in [0, -1, i32::MIN] {
            let err = validate_port(&spec(1, "", port), "selenosis service").unwrap_err();
            assert_eq!(
                err,
                CompilationError::InvalidPort {
                    resource: "selenosis service",
                    port
                }
            );
        }
    }

    #[test]
    fn port_above_u16_is_rejected() {
        assert!(validate_port(&spec(1, "", 65536), "x").is_err());
        assert_eq!(validate_port(&spec(1, "", 65535), "x"), Ok(65535));
    }

    #[test]
    fn validate_reports_capacity_before_port() {
        // Both rules violated: the first one wins.
        assert_eq!(
            validate(&spec(0, "", 0)),
            Err(CompilationError::InvalidCapacity { replicas: 0 })
        );
    }

    #[test]
    fn empty_service_name_is_rejected() {
        let err = require_service_name("", "browsers headless service", "browsersServiceName")
            .unwrap_err();
        assert_eq!(err.reason(), "MissingServiceName");
        assert_eq!(
            require_service_name("browsers", "x", "browsersServiceName"),
            Ok("browsers")
        );
    }
}
