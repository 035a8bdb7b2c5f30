//! Shared test helpers for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::{Value, json};

use crate::AccTestConfig;

/// Source a configuration layer is pushed as.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order on top of an explicit all-unset base.
///
/// The base carries `null` fields so the merge always has an object to
/// deserialise, even when every other layer is empty.
pub fn merge_layers(layers: &[(Layer, Value)]) -> AccTestConfig {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"project_id": null, "region": null}));

    for (layer, value) in layers.iter().cloned() {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }

    AccTestConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Loads configuration with the given CLI arguments, an isolated home
/// directory, and the supplied `TF_ACC_*` variables locked in place.
pub fn load_with_env(env: &[(&str, Option<&str>)], cli_args: &[&str]) -> AccTestConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ];
    vars.extend_from_slice(env);
    let _guard = env_lock::lock_env(vars);

    let mut args: Vec<OsString> = vec![OsString::from("stackit-acctest")];
    args.extend(cli_args.iter().map(OsString::from));

    AccTestConfig::load_from_iter(args).expect("config should load")
}
