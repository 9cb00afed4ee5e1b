//! Custom Resource Definitions for the selenosis operator

mod browsers;
mod hub;
mod types;

pub use browsers::{BrowserSpec, BrowsersLayout, Meta, PodOverrides};
pub use hub::{HubPhase, K8sSeleniumHub, K8sSeleniumHubSpec, K8sSeleniumHubStatus};
pub use types::{Condition, ConditionStatus};
