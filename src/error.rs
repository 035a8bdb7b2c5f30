//! Error types exposed by the acceptance-test helpers.

use thiserror::Error;

/// Errors surfaced while converting test inputs or loading test settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccTestError {
    /// A config variable kind has no literal text form.
    #[error("unsupported config variable type: {kind}")]
    UnsupportedType {
        /// Name of the rejected variant (e.g. `float`).
        kind: &'static str,
    },

    /// The acceptance test needs a project but none was configured.
    #[error("acceptance test project ID is required (set TF_ACC_PROJECT_ID)")]
    MissingProjectId,

    /// The acceptance test needs an organization but none was configured.
    #[error("acceptance test organization ID is required (set TF_ACC_ORGANIZATION_ID)")]
    MissingOrganizationId,

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
