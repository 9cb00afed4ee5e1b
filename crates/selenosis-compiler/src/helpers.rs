//! Shared derivations used by more than one builder

use std::collections::BTreeMap;

use selenosis_common::crd::K8sSeleniumHubSpec;
use selenosis_common::LABEL_APP;

use crate::defaults::CompilerDefaults;
use crate::k8s::LocalObjectReference;

/// Standard label set for a logical application.
///
/// Deployment selectors, pod labels and Service selectors all go through
/// here so they cannot drift apart.
pub fn app_labels(app: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(LABEL_APP.to_string(), app.to_string());
    labels
}

/// Command line of the selenosis container.
///
/// Order is fixed: binary, browsers config, namespace, browsers service,
/// browser limit, then the pull secret name when one is set.
pub fn selenosis_args(
    namespace: &str,
    spec: &K8sSeleniumHubSpec,
    defaults: &CompilerDefaults,
) -> Vec<String> {
    let mut args = vec![
        defaults.binary_path.clone(),
        "--browsers-config".to_string(),
        defaults.browsers_config_path(),
        "--namespace".to_string(),
        namespace.to_string(),
        "--service-name".to_string(),
        spec.browsers_service_name.clone(),
        "--browser-limit".to_string(),
        spec.browser_limit.clone(),
    ];
    if let Some(secret) = spec.image_pull_secret() {
        args.push(secret.to_string());
    }
    args
}

/// Pod image pull secrets: `None` unless a secret name is set.
pub fn image_pull_secrets(spec: &K8sSeleniumHubSpec) -> Option<Vec<LocalObjectReference>> {
    spec.image_pull_secret().map(|name| {
        vec![LocalObjectReference {
            name: name.to_string(),
        }]
    })
}
