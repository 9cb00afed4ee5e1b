//! CLI commands

use std::path::Path;

use selenosis_common::crd::K8sSeleniumHub;
use selenosis_common::yaml::load_hubs;
use tracing::debug;

use crate::{Error, Result};

pub mod crd;
pub mod render;
pub mod validate;

/// Read every hub document from a file.
///
/// Hubs without `metadata.namespace` are placed in `default_namespace`, the
/// way `kubectl apply -n` would. A file with no hub documents is an error.
pub fn read_hubs(path: &Path, default_namespace: &str) -> Result<Vec<K8sSeleniumHub>> {
    let content = std::fs::read_to_string(path)?;
    let mut hubs = load_hubs(&content)?;

    if hubs.is_empty() {
        return Err(Error::validation(format!(
            "no K8sSeleniumHub documents found in {}",
            path.display()
        )));
    }

    for hub in &mut hubs {
        let missing = hub.metadata.namespace.as_deref().map_or(true, str::is_empty);
        if missing {
            debug!(
                hub = hub.metadata.name.as_deref().unwrap_or_default(),
                namespace = default_namespace,
                "hub has no namespace, using default"
            );
            hub.metadata.namespace = Some(default_namespace.to_string());
        }
    }

    Ok(hubs)
}

/// Display name for a hub in command output
pub fn hub_name(hub: &K8sSeleniumHub) -> &str {
    hub.metadata.name.as_deref().unwrap_or("<unnamed>")
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn fills_missing_namespace() {
        let file = write_file(&format!("{VALID_HUB}---\n{NO_CAPACITY_HUB}"));
        let hubs = read_hubs(file.path(), "qa").unwrap();

        assert_eq!(hubs.len(), 2);
        assert_eq!(hubs[0].metadata.namespace.as_deref(), Some("selenosis"));
        assert_eq!(hubs[1].metadata.namespace.as_deref(), Some("qa"));
    }

    #[test]
    fn file_without_hubs_is_rejected() {
        let file = write_file("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: x\n");
        let err = read_hubs(file.path(), "default").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_hubs(Path::new("/nonexistent/hub.yaml"), "default").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
