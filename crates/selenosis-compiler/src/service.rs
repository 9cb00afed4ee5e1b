//! Service builders: the client-facing selenosis Service and the headless
//! Service browser pods are discovered through.

use std::collections::BTreeMap;

use selenosis_common::crd::K8sSeleniumHubSpec;
use selenosis_common::{APP_SELENOSIS, BROWSER_TYPE_VALUE, LABEL_BROWSER_TYPE};
use tracing::debug;

use crate::defaults::CompilerDefaults;
use crate::error::CompilationError;
use crate::helpers::app_labels;
use crate::k8s::{ObjectMeta, Service, ServicePort, ServiceSpec};
use crate::validate;

const SELENOSIS_SERVICE: &str = "selenosis service";
const BROWSERS_SERVICE: &str = "browsers headless service";

/// Builds the Services of a hub.
pub struct ServiceCompiler;

impl ServiceCompiler {
    /// Compile the client-facing selenosis Service.
    ///
    /// Exposes the selenosis port on a load balancer with a fixed node port.
    /// Sessions are routed per request, so there is no session affinity.
    pub fn compile_selenosis_service(
        namespace: &str,
        spec: &K8sSeleniumHubSpec,
        defaults: &CompilerDefaults,
    ) -> Result<Service, CompilationError> {
        let port = validate::validate_port(spec, SELENOSIS_SERVICE)?;
        let name = validate::require_service_name(
            &spec.selenosis_service_name,
            SELENOSIS_SERVICE,
            "selenosisServiceName",
        )?;

        let service = Service {
            api_version: "v1".to_string(),
            kind: "Service".to_string(),
            metadata: ObjectMeta::new(name, namespace),
            spec: ServiceSpec {
                selector: app_labels(APP_SELENOSIS),
                ports: vec![ServicePort {
                    name: Some(defaults.port_name.clone()),
                    port,
                    target_port: Some(port),
                    node_port: Some(defaults.node_port),
                    protocol: Some("TCP".to_string()),
                }],
                type_: Some("LoadBalancer".to_string()),
                external_traffic_policy: Some("Cluster".to_string()),
                session_affinity: Some("None".to_string()),
                ..Default::default()
            },
        };

        debug!(namespace, service = name, port, "compiled selenosis service");
        Ok(service)
    }

    /// Compile the headless Service browser pods register under.
    ///
    /// Browser pods accept connections before they pass readiness, so
    /// not-ready addresses are published.
    pub fn compile_browsers_service(
        namespace: &str,
        spec: &K8sSeleniumHubSpec,
    ) -> Result<Service, CompilationError> {
        let name = validate::require_service_name(
            &spec.browsers_service_name,
            BROWSERS_SERVICE,
            "browsersServiceName",
        )?;

        let mut selector = BTreeMap::new();
        selector.insert(
            LABEL_BROWSER_TYPE.to_string(),
            BROWSER_TYPE_VALUE.to_string(),
        );

        let service = Service {
            api_version: "v1".to_string(),
            kind: "Service".to_string(),
            metadata: ObjectMeta::new(name, namespace),
            spec: ServiceSpec {
                selector,
                cluster_ip: Some("None".to_string()),
                publish_not_ready_addresses: Some(true),
                ..Default::default()
            },
        };

        debug!(namespace, service = name, "compiled browsers headless service");
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_spec() -> K8sSeleniumHubSpec {
        K8sSeleniumHubSpec {
            selenosis_replicas: 1,
            selenosis_port: 4444,
            selenosis_image: "alcounit/selenosis:v1.0.0".to_string(),
            browsers_service_name: "browsers".to_string(),
            selenosis_service_name: "selenosis".to_string(),
            ..Default::default()
        }
    }

    fn selenosis_service(spec: &K8sSeleniumHubSpec) -> Result<Service, CompilationError> {
        ServiceCompiler::compile_selenosis_service("grid", spec, &CompilerDefaults::default())
    }

    // =========================================================================
    // Story: Client-Facing Service
    // =========================================================================

    #[test]
    fn selenosis_service_exposes_port_on_load_balancer() {
        let svc = selenosis_service(&make_spec()).unwrap();
        assert_eq!(svc.api_version, "v1");
        assert_eq!(svc.kind, "Service");
        assert_eq!(svc.metadata.name, "selenosis");
        assert_eq!(svc.metadata.namespace, "grid");
        assert_eq!(svc.spec.type_.as_deref(), Some("LoadBalancer"));
        assert_eq!(svc.spec.external_traffic_policy.as_deref(), Some("Cluster"));
        assert_eq!(svc.spec.session_affinity.as_deref(), Some("None"));
        assert!(svc.spec.cluster_ip.is_none());

        assert_eq!(svc.spec.ports.len(), 1);
        let port = &svc.spec.ports[0];
        assert_eq!(port.name.as_deref(), Some("selenium"));
        assert_eq!(port.port, 4444);
        assert_eq!(port.target_port, Some(4444));
        assert_eq!(port.node_port, Some(31000));
        assert_eq!(port.protocol.as_deref(), Some("TCP"));
    }

    #[test]
    fn selenosis_service_selects_deployment_pods() {
        let svc = selenosis_service(&make_spec()).unwrap();
        assert_eq!(svc.spec.selector, app_labels(APP_SELENOSIS));
    }

    #[test]
    fn node_port_override_applies() {
        let defaults = CompilerDefaults::default().with_node_port(32444);
        let svc =
            ServiceCompiler::compile_selenosis_service("grid", &make_spec(), &defaults).unwrap();
        assert_eq!(svc.spec.ports[0].node_port, Some(32444));
    }

    #[test]
    fn selenosis_service_requires_name() {
        let mut spec = make_spec();
        spec.selenosis_port = 8080;
        spec.selenosis_service_name = String::new();
        assert_eq!(
            selenosis_service(&spec),
            Err(CompilationError::MissingServiceName {
                resource: "selenosis service",
                field: "selenosisServiceName",
            })
        );
    }

    #[test]
    fn selenosis_service_rejects_port_before_name() {
        let mut spec = make_spec();
        spec.selenosis_port = -5;
        spec.selenosis_service_name = String::new();
        let err = selenosis_service(&spec).unwrap_err();
        assert_eq!(
            err,
            CompilationError::InvalidPort {
                resource: "selenosis service",
                port: -5
            }
        );
    }

    // =========================================================================
    // Story: Headless Browsers Service
    // =========================================================================

    #[test]
    fn browsers_service_is_headless_and_publishes_not_ready() {
        let svc = ServiceCompiler::compile_browsers_service("grid", &make_spec()).unwrap();
        assert_eq!(svc.metadata.name, "browsers");
        assert_eq!(svc.metadata.namespace, "grid");
        assert_eq!(svc.spec.cluster_ip.as_deref(), Some("None"));
        assert_eq!(svc.spec.publish_not_ready_addresses, Some(true));
        assert_eq!(svc.spec.selector.get("type"), Some(&"browser".to_string()));
        assert!(svc.spec.ports.is_empty());
        assert!(svc.spec.type_.is_none());
    }

    #[test]
    fn browsers_service_ignores_port() {
        let mut spec = make_spec();
        spec.selenosis_port = 0;
        assert!(ServiceCompiler::compile_browsers_service("grid", &spec).is_ok());
    }

    #[test]
    fn browsers_service_requires_name() {
        let mut spec = make_spec();
        spec.browsers_service_name = String::new();
        let err = ServiceCompiler::compile_browsers_service("grid", &spec).unwrap_err();
        assert_eq!(err.reason(), "MissingServiceName");
        assert!(err.to_string().contains("browsersServiceName"));
    }
}
