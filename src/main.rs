//! Prints the acceptance-test provider block for the current environment.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use stackit_acctest::{AccTestConfig, AccTestError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AccTestError> {
    let config = load_config()?;
    let provider = config.provider_config();

    writeln!(io::stdout().lock(), "{provider}").map_err(|error| AccTestError::Io {
        message: error.to_string(),
    })
}

/// Loads settings from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AccTestError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<AccTestConfig, AccTestError> {
    AccTestConfig::load().map_err(|error| AccTestError::Configuration {
        message: error.to_string(),
    })
}
