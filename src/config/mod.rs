//! Acceptance-test settings loaded from CLI, environment, and files.
//!
//! Acceptance tests run against a real STACKIT project. The project,
//! organization, region and any custom API endpoints come from the
//! environment of the test run and are merged using ortho-config's layered
//! approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – every setting unset, beta resources disabled
//! 2. **Configuration file** – `.stackit-acctest.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `TF_ACC_PROJECT_ID`, `TF_ACC_REGION`,
//!    `TF_ACC_IAAS_CUSTOM_ENDPOINT`, ...
//! 4. **Command-line arguments** – `--project-id`/`-p`, `--region`/`-r`, ...
//!
//! # Configuration File
//!
//! ```toml
//! project_id = "11111111-2222-3333-4444-555555555555"
//! organization_id = "66666666-7777-8888-9999-000000000000"
//! region = "eu01"
//! enable_beta_resources = true
//! experiments = ["iaas", "network"]
//! iaas_custom_endpoint = "https://iaas.qa.example.test"
//! ```

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AccTestError;
use crate::provider_config::{DEFAULT_REGION, ProviderConfigBuilder};

/// Program name handed to ortho-config when only environment and files
/// should be consulted.
const PROGRAM_NAME: &str = "stackit-acctest";

/// Settings shared by every acceptance test in a run.
///
/// # Environment Variables
///
/// - `TF_ACC_PROJECT_ID` or `--project-id`: Project that test resources are
///   created in
/// - `TF_ACC_ORGANIZATION_ID` or `--organization-id`: Organization for
///   organization-scoped resources
/// - `TF_ACC_REGION` or `--region`: Provider default region
/// - `TF_ACC_EXPERIMENTS` or `--experiments`: Experiments to enable,
///   comma-separated in the environment
/// - `TF_ACC_<SERVICE>_CUSTOM_ENDPOINT` or `--<service>-custom-endpoint`:
///   Custom API endpoint per service
///
/// # Example
///
/// ```no_run
/// use stackit_acctest::AccTestConfig;
///
/// let config = AccTestConfig::from_env().expect("failed to load configuration");
/// let project_id = config.require_project_id().expect("project required");
/// let provider = config.provider_config().render();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TF_ACC",
    discovery(
        dotfile_name = ".stackit-acctest.toml",
        config_file_name = "stackit-acctest.toml",
        app_name = "stackit-acctest"
    )
)]
pub struct AccTestConfig {
    /// Project that test resources are created in.
    #[ortho_config(cli_short = 'p')]
    pub project_id: Option<String>,

    /// Organization used by organization-scoped resources.
    #[ortho_config(cli_short = 'o')]
    pub organization_id: Option<String>,

    /// Provider default region. Falls back to [`DEFAULT_REGION`].
    #[ortho_config(cli_short = 'r')]
    pub region: Option<String>,

    /// Emits `enable_beta_resources = true` in the provider block.
    ///
    /// Can be provided via:
    /// - CLI: `--enable-beta-resources` / `-b`
    /// - Config file: `enable_beta_resources = true`
    ///
    /// Note: `TF_ACC_ENABLE_BETA_RESOURCES` is not read because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'b')]
    pub enable_beta_resources: bool,

    /// Experiments to enable.
    ///
    /// Can be provided via:
    /// - CLI: `--experiments <NAME>` / `-e <NAME>`, repeatable
    /// - Environment: `TF_ACC_EXPERIMENTS=iaas,network`
    /// - Config file: `experiments = ["iaas", "network"]` or `"iaas,network"`
    #[ortho_config(cli_short = 'e')]
    #[serde(deserialize_with = "deserialize_experiments")]
    pub experiments: Option<Vec<String>>,

    /// Custom endpoint for the IaaS API.
    #[ortho_config()]
    pub iaas_custom_endpoint: Option<String>,

    /// Custom endpoint for the DNS API.
    #[ortho_config()]
    pub dns_custom_endpoint: Option<String>,

    /// Custom endpoint for the Resource Manager API.
    #[ortho_config()]
    pub resourcemanager_custom_endpoint: Option<String>,

    /// Custom endpoint for the Object Storage API.
    #[ortho_config()]
    pub objectstorage_custom_endpoint: Option<String>,

    /// Custom endpoint for the Kubernetes Engine (SKE) API.
    #[ortho_config()]
    pub ske_custom_endpoint: Option<String>,

    /// Custom endpoint for the Authorization API.
    #[ortho_config()]
    pub authorization_custom_endpoint: Option<String>,

    /// Custom endpoint for the Service Account API.
    #[ortho_config()]
    pub service_account_custom_endpoint: Option<String>,

    /// Custom endpoint for the token flow.
    #[ortho_config()]
    pub token_custom_endpoint: Option<String>,
}

impl AccTestConfig {
    /// Loads settings from configuration files and the environment.
    ///
    /// Command-line arguments of the running process are ignored so the test
    /// harness's own flags never reach ortho-config.
    ///
    /// # Errors
    ///
    /// Returns [`AccTestError::Configuration`] when a configuration file or
    /// environment value cannot be parsed.
    pub fn from_env() -> Result<Self, AccTestError> {
        let config = Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|error| {
            AccTestError::Configuration {
                message: error.to_string(),
            }
        })?;

        let endpoints = config.custom_endpoints();
        if !endpoints.is_empty() {
            let services: Vec<&str> = endpoints.iter().map(|(service, _)| *service).collect();
            tracing::debug!("using custom endpoints for: {}", services.join(", "));
        }

        Ok(config)
    }

    /// Returns the project ID or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`AccTestError::MissingProjectId`] when no project is configured.
    pub fn require_project_id(&self) -> Result<&str, AccTestError> {
        self.project_id
            .as_deref()
            .ok_or(AccTestError::MissingProjectId)
    }

    /// Returns the organization ID or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`AccTestError::MissingOrganizationId`] when no organization is
    /// configured.
    pub fn require_organization_id(&self) -> Result<&str, AccTestError> {
        self.organization_id
            .as_deref()
            .ok_or(AccTestError::MissingOrganizationId)
    }

    /// Returns the configured region, or [`DEFAULT_REGION`].
    #[must_use]
    pub fn region_or_default(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Returns the configured experiments in order, dropping blank entries.
    #[must_use]
    pub fn experiment_names(&self) -> Vec<&str> {
        self.experiments
            .iter()
            .flatten()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Lists configured custom endpoints as `(service, url)` pairs.
    ///
    /// Services appear in a fixed order; unset endpoints are skipped.
    #[must_use]
    pub fn custom_endpoints(&self) -> Vec<(&'static str, &str)> {
        [
            ("iaas", &self.iaas_custom_endpoint),
            ("dns", &self.dns_custom_endpoint),
            ("resourcemanager", &self.resourcemanager_custom_endpoint),
            ("objectstorage", &self.objectstorage_custom_endpoint),
            ("ske", &self.ske_custom_endpoint),
            ("authorization", &self.authorization_custom_endpoint),
            ("service_account", &self.service_account_custom_endpoint),
            ("token", &self.token_custom_endpoint),
        ]
        .into_iter()
        .filter_map(|(service, url)| url.as_deref().map(|value| (service, value)))
        .collect()
    }

    /// Returns a provider block builder seeded from these settings.
    pub fn provider_config(&self) -> ProviderConfigBuilder {
        let mut builder = ProviderConfigBuilder::new().default_region(self.region_or_default());

        if self.enable_beta_resources {
            builder = builder.enable_beta_resources();
        }

        for experiment in self.experiment_names() {
            builder = builder.add_experiment(experiment);
        }

        for (service, url) in self.custom_endpoints() {
            builder = builder.custom_endpoint(service, url);
        }

        builder
    }
}

/// Experiments as they arrive from a layer: a single value or a list.
///
/// The environment layer yields a plain string for a single entry and a
/// sequence once the value contains a comma.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExperimentList {
    Single(String),
    Many(Vec<String>),
}

fn deserialize_experiments<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<ExperimentList>::deserialize(deserializer)?;
    Ok(list.map(|experiments| match experiments {
        ExperimentList::Single(value) => value.split(',').map(str::to_owned).collect(),
        ExperimentList::Many(values) => values,
    }))
}

#[cfg(test)]
mod tests;
