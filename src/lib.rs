//! Acceptance-test support for the STACKIT Terraform provider.
//!
//! The crate renders the `provider "stackit"` block that acceptance tests
//! prepend to their configurations, converts typed test variables into the
//! literal text the provider state will contain, and loads the `TF_ACC_*`
//! settings shared by a test run.

pub mod config;
pub mod error;
pub mod naming;
pub mod provider_config;
pub mod variable;

pub use config::AccTestConfig;
pub use error::AccTestError;
pub use naming::{resource_name_at, resource_name_with_date_time};
pub use provider_config::{DEFAULT_REGION, ProviderConfigBuilder};
pub use variable::{ConfigVariable, convert_config_variable};
