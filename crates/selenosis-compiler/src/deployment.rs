//! Selenosis Deployment builder
//!
//! One container per replica: selenosis launches browser pods itself, so
//! browsers never appear as containers here.

use std::collections::BTreeMap;

use selenosis_common::crd::K8sSeleniumHubSpec;
use selenosis_common::APP_SELENOSIS;
use tracing::debug;

use crate::defaults::CompilerDefaults;
use crate::error::CompilationError;
use crate::helpers::{app_labels, image_pull_secrets, selenosis_args};
use crate::k8s::{
    Container, ContainerPort, Deployment, DeploymentSpec, DeploymentStrategy, HttpGetAction,
    IntOrString, LabelSelector, ObjectMeta, PodMeta, PodSpec, PodTemplateSpec, ProbeSpec,
    RollingUpdateConfig, Volume, VolumeMount,
};
use crate::validate;

const RESOURCE: &str = "selenosis deployment";

/// Builds the selenosis Deployment from a hub spec.
pub struct DeploymentCompiler;

impl DeploymentCompiler {
    /// Compile the selenosis Deployment.
    ///
    /// Fails with `InvalidCapacity` or `InvalidPort` before building anything.
    pub fn compile(
        namespace: &str,
        spec: &K8sSeleniumHubSpec,
        defaults: &CompilerDefaults,
    ) -> Result<Deployment, CompilationError> {
        validate::validate_capacity(spec)?;
        let port = validate::validate_port(spec, RESOURCE)?;

        // A browser limit admits a non-positive replica count
        let replicas = u32::try_from(spec.selenosis_replicas).unwrap_or(0);
        let labels = app_labels(APP_SELENOSIS);

        let deployment = Deployment {
            api_version: "apps/v1".to_string(),
            kind: "Deployment".to_string(),
            metadata: ObjectMeta::new(APP_SELENOSIS, namespace),
            spec: DeploymentSpec {
                replicas,
                selector: LabelSelector {
                    match_labels: labels.clone(),
                },
                template: PodTemplateSpec {
                    metadata: PodMeta {
                        namespace: Some(namespace.to_string()),
                        labels,
                        annotations: BTreeMap::new(),
                    },
                    spec: PodSpec {
                        containers: vec![Self::compile_container(namespace, spec, port, defaults)],
                        volumes: vec![Volume::from_config_map(
                            &defaults.config_volume_name,
                            &defaults.config_map_name,
                        )],
                        image_pull_secrets: image_pull_secrets(spec),
                    },
                },
                strategy: Some(Self::compile_strategy(defaults)),
            },
        };

        debug!(namespace, replicas, port, "compiled selenosis deployment");
        Ok(deployment)
    }

    fn compile_container(
        namespace: &str,
        spec: &K8sSeleniumHubSpec,
        port: u16,
        defaults: &CompilerDefaults,
    ) -> Container {
        let probe = Self::compile_probe(port, defaults);

        Container {
            name: APP_SELENOSIS.to_string(),
            image: spec.selenosis_image.clone(),
            image_pull_policy: Some(defaults.image_pull_policy.clone()),
            args: Some(selenosis_args(namespace, spec, defaults)),
            ports: vec![ContainerPort {
                name: Some(defaults.port_name.clone()),
                container_port: port,
                protocol: Some("TCP".to_string()),
            }],
            liveness_probe: Some(probe.clone()),
            readiness_probe: Some(probe),
            volume_mounts: vec![VolumeMount {
                name: defaults.config_volume_name.clone(),
                mount_path: defaults.config_mount_path.clone(),
                read_only: None,
            }],
        }
    }

    /// Readiness and liveness share this probe.
    fn compile_probe(port: u16, defaults: &CompilerDefaults) -> ProbeSpec {
        ProbeSpec {
            http_get: Some(HttpGetAction {
                path: defaults.probe.path.clone(),
                port,
            }),
            initial_delay_seconds: Some(defaults.probe.initial_delay_seconds),
            period_seconds: Some(defaults.probe.period_seconds),
        }
    }

    fn compile_strategy(defaults: &CompilerDefaults) -> DeploymentStrategy {
        DeploymentStrategy {
            type_: "RollingUpdate".to_string(),
            rolling_update: Some(RollingUpdateConfig {
                max_unavailable: Some(IntOrString::Int(defaults.rolling_update.max_unavailable)),
                max_surge: Some(IntOrString::Int(defaults.rolling_update.max_surge)),
            }),
        }
    }
}
