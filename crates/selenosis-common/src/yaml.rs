//! YAML input and output for hub documents
//!
//! Hub files may hold several `---`-separated documents, including
//! unrelated kinds; only `K8sSeleniumHub` documents are kept.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crd::K8sSeleniumHub;
use crate::error::UNKNOWN_CONTEXT;
use crate::{Error, Result};

const HUB_KIND: &str = "K8sSeleniumHub";

/// Parse every `K8sSeleniumHub` document out of a YAML stream.
///
/// Empty documents and documents of other kinds are skipped.
pub fn load_hubs(input: &str) -> Result<Vec<K8sSeleniumHub>> {
    let mut hubs = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let value = serde_yaml::Value::deserialize(document)
            .map_err(|e| Error::serialization(format!("document {}: {}", index, e)))?;

        if value.is_null() {
            continue;
        }

        let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or_default();
        if kind != HUB_KIND {
            debug!(index, kind, "skipping non-hub document");
            continue;
        }

        let hub: K8sSeleniumHub = serde_yaml::from_value(value).map_err(|e| {
            Error::serialization_for_kind(HUB_KIND, format!("document {}: {}", index, e))
        })?;
        if hub.metadata.name.as_deref().map_or(true, str::is_empty) {
            return Err(Error::validation_for_field(
                UNKNOWN_CONTEXT,
                "metadata.name",
                format!("document {}: {} has no name", index, HUB_KIND),
            ));
        }
        hubs.push(hub);
    }

    Ok(hubs)
}

/// Write values as a `---`-separated YAML stream.
pub fn to_yaml_stream<T: Serialize>(values: &[T]) -> Result<String> {
    let mut out = String::new();
    for value in values {
        out.push_str("---\n");
        out.push_str(&serde_yaml::to_string(value)?);
    }
    Ok(out)
}
