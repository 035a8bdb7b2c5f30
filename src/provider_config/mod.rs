//! Provider configuration blocks for acceptance tests.
//!
//! Acceptance tests prepend a `provider "stackit"` block to every test
//! configuration. [`ProviderConfigBuilder`] accumulates the provider-level
//! settings a test cares about and renders them in the exact syntax the
//! provider's HCL parser expects:
//!
//! ```text
//! provider "stackit" {
//! 	default_region = "eu01"
//! 	enable_beta_resources = true
//! 	experiments = [ "iaas", "resourcemanager" ]
//! 	iaas_custom_endpoint = "https://iaas.example.test"
//! }
//! ```
//!
//! Only `default_region` is always present. The remaining attributes are
//! emitted when set, in the order shown. Values are written verbatim; the
//! builder does not validate regions, experiment names or URLs.

use std::fmt;

/// Region rendered when a test does not choose one.
pub const DEFAULT_REGION: &str = "eu01";

/// Name of the provider block.
pub const PROVIDER_NAME: &str = "stackit";

/// Custom API endpoint override for a single service.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CustomEndpoint {
    service: String,
    url: String,
}

/// Builder for the `provider "stackit"` block used by acceptance tests.
///
/// # Example
///
/// ```
/// use stackit_acctest::ProviderConfigBuilder;
///
/// let config = ProviderConfigBuilder::new()
///     .default_region("eu02")
///     .add_experiment("iaas")
///     .render();
///
/// assert_eq!(
///     config,
///     "provider \"stackit\" {\n\tdefault_region = \"eu02\"\n\texperiments = [ \"iaas\" ]\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ProviderConfigBuilder {
    region: String,
    beta_resources: bool,
    experiments: Vec<String>,
    custom_endpoints: Vec<CustomEndpoint>,
}

impl ProviderConfigBuilder {
    /// Creates a builder targeting [`DEFAULT_REGION`] with beta resources
    /// disabled and no experiments.
    pub fn new() -> Self {
        Self {
            region: DEFAULT_REGION.to_owned(),
            beta_resources: false,
            experiments: Vec::new(),
            custom_endpoints: Vec::new(),
        }
    }

    /// Sets the `default_region` attribute.
    pub fn default_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Emits `enable_beta_resources = true`.
    pub fn enable_beta_resources(mut self) -> Self {
        self.beta_resources = true;
        self
    }

    /// Appends an experiment to the `experiments` list.
    ///
    /// Duplicates are kept.
    pub fn add_experiment(mut self, name: impl Into<String>) -> Self {
        self.experiments.push(name.into());
        self
    }

    /// Points `service` at a custom API endpoint.
    ///
    /// Renders as `<service>_custom_endpoint = "<url>"`. Setting the same
    /// service twice keeps its original position and the latest URL.
    pub fn custom_endpoint(mut self, service: impl Into<String>, url: impl Into<String>) -> Self {
        let service_name = service.into();
        let endpoint_url = url.into();

        if let Some(existing) = self
            .custom_endpoints
            .iter_mut()
            .find(|endpoint| endpoint.service == service_name)
        {
            existing.url = endpoint_url;
        } else {
            self.custom_endpoints.push(CustomEndpoint {
                service: service_name,
                url: endpoint_url,
            });
        }
        self
    }

    /// Renders the provider block.
    ///
    /// The output has no trailing newline, so it can be concatenated with
    /// resource configuration using `format!("{provider}\n{resources}")`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for ProviderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProviderConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "provider \"{PROVIDER_NAME}\" {{")?;
        writeln!(f, "\tdefault_region = \"{}\"", self.region)?;

        if self.beta_resources {
            writeln!(f, "\tenable_beta_resources = true")?;
        }

        if !self.experiments.is_empty() {
            let quoted: Vec<String> = self
                .experiments
                .iter()
                .map(|experiment| format!("\"{experiment}\""))
                .collect();
            writeln!(f, "\texperiments = [ {} ]", quoted.join(", "))?;
        }

        for endpoint in &self.custom_endpoints {
            writeln!(
                f,
                "\t{}_custom_endpoint = \"{}\"",
                endpoint.service, endpoint.url
            )?;
        }

        write!(f, "}}")
    }
}
