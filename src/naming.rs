//! Unique names for resources created by acceptance tests.
//!
//! Test runs share projects, so resource names carry a `tf-acc-` prefix for
//! cleanup tooling and a UTC timestamp to avoid collisions between runs.

use chrono::{DateTime, Utc};

/// Prefix shared by every resource created by acceptance tests.
pub const RESOURCE_NAME_PREFIX: &str = "tf-acc";

/// Returns `tf-acc-<name>-<timestamp>` using the current UTC time.
#[must_use]
pub fn resource_name_with_date_time(name: &str) -> String {
    resource_name_at(name, Utc::now())
}

/// Returns `tf-acc-<name>-<timestamp>` for the given instant.
///
/// The timestamp is RFC 3339 without fractional seconds or offset, e.g.
/// `tf-acc-network-2024-05-01T10:20:30`.
#[must_use]
pub fn resource_name_at(name: &str, at: DateTime<Utc>) -> String {
    let timestamp = at.format("%Y-%m-%dT%H:%M:%S");
    format!("{RESOURCE_NAME_PREFIX}-{name}-{timestamp}")
}
