//! End-to-end compilation scenarios for K8sSeleniumHub specs

use selenosis_common::crd::{K8sSeleniumHub, K8sSeleniumHubSpec};
use selenosis_compiler::{
    CompilationError, CompilerDefaults, DeploymentCompiler, HubCompiler, Resource,
    ServiceCompiler,
};

fn base_spec() -> K8sSeleniumHubSpec {
    K8sSeleniumHubSpec {
        selenosis_replicas: 2,
        selenosis_port: 4444,
        selenosis_image: "alcounit/selenosis:v1.0.0".to_string(),
        browsers_service_name: "browsers".to_string(),
        selenosis_service_name: "selenosis".to_string(),
        ..Default::default()
    }
}

fn defaults() -> CompilerDefaults {
    CompilerDefaults::default()
}

// =============================================================================
// Story: Basic Grid
// =============================================================================

#[test]
fn basic_grid_compiles_probes_and_headless_service() {
    let spec = base_spec();
    let out = HubCompiler::new("grid", "selenosis", &spec).compile().unwrap();

    let deployment = &out.deployment;
    assert_eq!(deployment.spec.replicas, 2);
    let container = &deployment.spec.template.spec.containers[0];
    assert_eq!(container.ports[0].container_port, 4444);
    let probe = container.readiness_probe.as_ref().unwrap();
    let http = probe.http_get.as_ref().unwrap();
    assert_eq!(http.path, "/healthz");
    assert_eq!(http.port, 4444);
    assert!(deployment.spec.template.spec.image_pull_secrets.is_none());

    let headless = &out.browsers_service;
    assert_eq!(headless.metadata.name, "browsers");
    assert_eq!(headless.spec.cluster_ip.as_deref(), Some("None"));
    assert_eq!(headless.spec.publish_not_ready_addresses, Some(true));
}

// =============================================================================
// Story: Grid Without Capacity
// =============================================================================

#[test]
fn grid_without_replicas_or_limit_is_rejected() {
    let mut spec = base_spec();
    spec.selenosis_replicas = 0;
    spec.browser_limit = String::new();

    let err = DeploymentCompiler::compile("selenosis", &spec, &defaults()).unwrap_err();
    assert_eq!(err, CompilationError::InvalidCapacity { replicas: 0 });
    assert!(err.to_string().contains("0 replicas"));
}

// =============================================================================
// Story: Client Service Name Required
// =============================================================================

#[test]
fn client_service_requires_a_name() {
    let mut spec = base_spec();
    spec.selenosis_port = 8080;
    spec.selenosis_service_name = String::new();

    let err = ServiceCompiler::compile_selenosis_service("selenosis", &spec, &defaults())
        .unwrap_err();
    assert_eq!(err.reason(), "MissingServiceName");
}

// =============================================================================
// Story: Private Registry
// =============================================================================

#[test]
fn pull_secret_reaches_args_and_pod_spec() {
    let mut spec = base_spec();
    spec.image_pull_secret_name = "regcred".to_string();

    let out = HubCompiler::new("grid", "selenosis", &spec).compile().unwrap();
    let pod = &out.deployment.spec.template.spec;
    let args = pod.containers[0].args.as_ref().unwrap();
    assert_eq!(args.last().map(String::as_str), Some("regcred"));

    let names: Vec<&str> = pod
        .image_pull_secrets
        .as_ref()
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["regcred"]);
}

// =============================================================================
// Story: Invariants Across Resources
// =============================================================================

#[test]
fn non_positive_port_fails_deployment_and_client_service() {
    for port in [0, -1, -4444] {
        let mut spec = base_spec();
        spec.selenosis_port = port;

        let deployment_err = DeploymentCompiler::compile("ns", &spec, &defaults()).unwrap_err();
        assert_eq!(deployment_err.reason(), "InvalidPort");

        let service_err =
            ServiceCompiler::compile_selenosis_service("ns", &spec, &defaults()).unwrap_err();
        assert_eq!(service_err.reason(), "InvalidPort");
    }
}

#[test]
fn port_beyond_tcp_range_fails_whole_pass() {
    let mut spec = base_spec();
    spec.selenosis_port = 70000;

    let err = HubCompiler::new("grid", "ns", &spec).compile().unwrap_err();
    assert_eq!(
        err,
        CompilationError::InvalidPort {
            resource: "selenosis deployment",
            port: 70000,
        }
    );
    assert!(err.to_string().contains("70000"));
}

#[test]
fn empty_browsers_service_name_fails_headless_service() {
    let mut spec = base_spec();
    spec.browsers_service_name = String::new();
    let err = ServiceCompiler::compile_browsers_service("ns", &spec).unwrap_err();
    assert_eq!(err.reason(), "MissingServiceName");
}

#[test]
fn every_resource_inherits_namespace() {
    let spec = base_spec();
    for namespace in ["default", "qa", "team-browsers"] {
        let out = HubCompiler::new("grid", namespace, &spec).compile().unwrap();
        assert!(out
            .resources()
            .iter()
            .all(|r| r.namespace() == namespace));
    }
}

#[test]
fn container_probe_and_target_port_agree() {
    let mut spec = base_spec();
    spec.selenosis_port = 4545;
    let out = HubCompiler::new("grid", "qa", &spec).compile().unwrap();

    let container = &out.deployment.spec.template.spec.containers[0];
    let container_port = container.ports[0].container_port;
    let probe_port = container
        .liveness_probe
        .as_ref()
        .and_then(|p| p.http_get.as_ref())
        .map(|h| h.port);
    let target_port = out.selenosis_service.spec.ports[0].target_port;

    assert_eq!(container_port, 4545);
    assert_eq!(probe_port, Some(4545));
    assert_eq!(target_port, Some(4545));
}

#[test]
fn deployment_selector_matches_client_service_selector() {
    let spec = base_spec();
    let out = HubCompiler::new("grid", "qa", &spec).compile().unwrap();
    assert_eq!(
        out.deployment.spec.template.metadata.labels,
        out.selenosis_service.spec.selector
    );
}

#[test]
fn compilation_is_idempotent() {
    let mut spec = base_spec();
    spec.image_pull_secret_name = "regcred".to_string();
    spec.browser_limit = "20".to_string();

    let first = HubCompiler::new("grid", "qa", &spec).compile().unwrap();
    let second = HubCompiler::new("grid", "qa", &spec).compile().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.resources()).unwrap(),
        serde_json::to_string(&second.resources()).unwrap()
    );
}

// =============================================================================
// Manifests
// =============================================================================

#[test]
fn hub_document_compiles_to_plain_manifests() {
    let hub: K8sSeleniumHub = serde_yaml::from_str(
        r#"
apiVersion: selenium.k8s.io/v1
kind: K8sSeleniumHub
metadata:
  name: grid
  namespace: selenosis
spec:
  selenosisReplicas: 1
  selenosisPort: 4444
  browserLimit: "15"
  selenosisImage: alcounit/selenosis:v1.0.0
  browsersServiceName: seleniferous
  selenosisServiceName: selenosis
"#,
    )
    .unwrap();

    let out = HubCompiler::for_hub(&hub).unwrap().compile().unwrap();
    let manifests = serde_json::to_value(out.resources()).unwrap();

    assert_eq!(manifests[0]["kind"], "Service");
    assert_eq!(manifests[0]["spec"]["clusterIP"], "None");
    assert_eq!(manifests[1]["spec"]["type"], "LoadBalancer");
    assert_eq!(manifests[1]["spec"]["ports"][0]["nodePort"], 31000);
    assert_eq!(manifests[2]["kind"], "Deployment");
    assert_eq!(
        manifests[2]["spec"]["strategy"]["rollingUpdate"]["maxSurge"],
        1
    );
    assert_eq!(
        manifests[2]["spec"]["template"]["spec"]["containers"][0]["args"],
        serde_json::json!([
            "/selenosis",
            "--browsers-config",
            "/etc/selenosis/browsers.yaml",
            "--namespace",
            "selenosis",
            "--service-name",
            "seleniferous",
            "--browser-limit",
            "15"
        ])
    );
    assert!(manifests[2]["spec"]["template"]["spec"]
        .get("imagePullSecrets")
        .is_none());
    assert_eq!(
        manifests[2]["spec"]["template"]["metadata"]["namespace"],
        "selenosis"
    );
}

#[test]
fn resources_are_ordered_services_then_deployment() {
    let spec = base_spec();
    let out = HubCompiler::new("grid", "qa", &spec).compile().unwrap();
    let resources = out.resources();
    let kinds: Vec<&str> = resources.iter().map(Resource::kind).collect();
    assert_eq!(kinds, vec!["Service", "Service", "Deployment"]);
}
