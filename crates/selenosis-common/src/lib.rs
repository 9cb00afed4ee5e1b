//! Common types for the selenosis operator: CRDs, errors, and utilities

#![deny(missing_docs)]

pub mod crd;
pub mod error;
pub mod meta;
pub mod telemetry;
pub mod yaml;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Label key used by selectors to tie pods to their Deployment and Services
pub const LABEL_APP: &str = "app";

/// Logical application name of the selenosis router
pub const APP_SELENOSIS: &str = "selenosis";

/// Label key marking the controller that owns a generated resource
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";

/// Value of [`LABEL_MANAGED_BY`] for resources generated by this operator
pub const LABEL_MANAGED_BY_SELENOSIS: &str = "selenosis-operator";

/// Label key carried by browser pods that selenosis launches
pub const LABEL_BROWSER_TYPE: &str = "type";

/// Value of [`LABEL_BROWSER_TYPE`] on browser pods
pub const BROWSER_TYPE_VALUE: &str = "browser";
