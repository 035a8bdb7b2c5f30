//! Behavioural tests for config variable conversion.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use stackit_acctest::{AccTestError, ConfigVariable, convert_config_variable};

#[derive(ScenarioState, Default)]
struct ConversionState {
    variable: Slot<ConfigVariable>,
    converted: Slot<String>,
    error: Slot<AccTestError>,
}

#[fixture]
fn conversion_state() -> ConversionState {
    ConversionState::default()
}

// --- Given steps ---

#[given("a string variable {value}")]
fn given_string(conversion_state: &ConversionState, value: String) {
    let cleaned = value.trim_matches('"');
    conversion_state
        .variable
        .set(ConfigVariable::string(cleaned));
}

#[given("a boolean variable {value}")]
fn given_bool(conversion_state: &ConversionState, value: String) {
    let parsed: bool = value
        .parse()
        .unwrap_or_else(|error| panic!("invalid boolean {value}: {error}"));
    conversion_state.variable.set(ConfigVariable::bool(parsed));
}

#[given("an integer variable {value}")]
fn given_integer(conversion_state: &ConversionState, value: String) {
    let parsed: i64 = value
        .parse()
        .unwrap_or_else(|error| panic!("invalid integer {value}: {error}"));
    conversion_state.variable.set(ConfigVariable::integer(parsed));
}

#[given("a float variable {value}")]
fn given_float(conversion_state: &ConversionState, value: String) {
    let parsed: f64 = value
        .parse()
        .unwrap_or_else(|error| panic!("invalid float {value}: {error}"));
    conversion_state.variable.set(ConfigVariable::Float(parsed));
}

// --- When steps ---

#[when("the variable is converted")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_converted(conversion_state: &ConversionState) {
    let result = conversion_state
        .variable
        .with_ref(convert_config_variable)
        .expect("variable not initialised");

    match result {
        Ok(text) => conversion_state.converted.set(text),
        Err(error) => conversion_state.error.set(error),
    }
}

// --- Then steps ---

#[then("the converted text is {expected}")]
fn then_converted_text(conversion_state: &ConversionState, expected: String) {
    let expected_clean = expected.trim_matches('"');

    let converted = conversion_state
        .converted
        .get()
        .unwrap_or_else(|| panic!("conversion did not succeed"));

    assert_eq!(converted, expected_clean, "converted text mismatch");
}

#[then("conversion fails because {kind} is unsupported")]
fn then_conversion_fails(conversion_state: &ConversionState, kind: String) {
    let kind_clean = kind.trim_matches('"');

    let error = conversion_state
        .error
        .get()
        .unwrap_or_else(|| panic!("conversion unexpectedly succeeded"));

    assert!(
        matches!(error, AccTestError::UnsupportedType { kind: rejected } if rejected == kind_clean),
        "expected UnsupportedType for {kind_clean}, got {error:?}"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/config_variable.feature", index = 0)]
fn string_variables_unquoted(conversion_state: ConversionState) {
    let _ = conversion_state;
}

#[scenario(path = "tests/features/config_variable.feature", index = 1)]
fn boolean_variables(conversion_state: ConversionState) {
    let _ = conversion_state;
}

#[scenario(path = "tests/features/config_variable.feature", index = 2)]
fn integer_variables(conversion_state: ConversionState) {
    let _ = conversion_state;
}

#[scenario(path = "tests/features/config_variable.feature", index = 3)]
fn float_variables_rejected(conversion_state: ConversionState) {
    let _ = conversion_state;
}
