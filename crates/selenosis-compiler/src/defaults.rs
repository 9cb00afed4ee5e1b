//! Defaulting stage: operational policy applied to every compiled hub
//!
//! None of these values come from the hub spec. `CompilerDefaults::default()`
//! is the policy the operator ships with.

/// Rolling update bounds for the selenosis Deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollingUpdatePolicy {
    /// Pods that may be created above the desired count
    pub max_surge: i32,
    /// Pods that may be unavailable during the update
    pub max_unavailable: i32,
}

impl Default for RollingUpdatePolicy {
    fn default() -> Self {
        Self {
            max_surge: 1,
            max_unavailable: 1,
        }
    }
}

/// HTTP health check used for both readiness and liveness
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbePolicy {
    /// Request path
    pub path: String,
    /// Seconds after container start before the first check
    pub initial_delay_seconds: i32,
    /// Seconds between checks
    pub period_seconds: i32,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self {
            path: "/healthz".to_string(),
            initial_delay_seconds: 3,
            period_seconds: 2,
        }
    }
}

/// Fixed values applied while compiling a hub
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerDefaults {
    /// Rolling update bounds
    pub rolling_update: RollingUpdatePolicy,
    /// Readiness/liveness check
    pub probe: ProbePolicy,
    /// Node port of the selenosis Service
    pub node_port: u16,
    /// ConfigMap holding the browsers config
    pub config_map_name: String,
    /// Pod volume backed by the ConfigMap
    pub config_volume_name: String,
    /// Where the ConfigMap is mounted in the selenosis container
    pub config_mount_path: String,
    /// Browsers config file name inside the mount
    pub browsers_config_file: String,
    /// Selenosis binary, first element of the container args
    pub binary_path: String,
    /// Name of the selenosis container and service port
    pub port_name: String,
    /// Image pull policy of the selenosis container
    pub image_pull_policy: String,
}

impl Default for CompilerDefaults {
    fn default() -> Self {
        Self {
            rolling_update: RollingUpdatePolicy::default(),
            probe: ProbePolicy::default(),
            node_port: 31000,
            config_map_name: "selenosis-config".to_string(),
            config_volume_name: "browsers-config".to_string(),
            config_mount_path: "/etc/selenosis".to_string(),
            browsers_config_file: "browsers.yaml".to_string(),
            binary_path: "/selenosis".to_string(),
            port_name: "selenium".to_string(),
            image_pull_policy: "Always".to_string(),
        }
    }
}

impl CompilerDefaults {
    /// Override the node port of the selenosis Service
    pub fn with_node_port(mut self, node_port: u16) -> Self {
        self.node_port = node_port;
        self
    }

    /// Override the ConfigMap holding the browsers config
    pub fn with_config_map(mut self, name: impl Into<String>) -> Self {
        self.config_map_name = name.into();
        self
    }

    /// Full in-container path of the browsers config file
    pub fn browsers_config_path(&self) -> String {
        format!(
            "{}/{}",
            self.config_mount_path.trim_end_matches('/'),
            self.browsers_config_file
        )
    }
}
