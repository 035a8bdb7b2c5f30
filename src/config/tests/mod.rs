//! Unit tests for acceptance-test settings.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Required IDs, region, experiments and endpoints
//! - `env_loading`: Loading from `TF_ACC_*` variables and CLI flags
//! - `provider_seeding`: Provider block built from loaded settings

mod helpers;
