//! Integration tests for the `calculate file` command.
use carbon_calc::activity::CalculationInput;
use carbon_calc::calculator::calculate;
use carbon_calc::cli::{CalculateOpts, handle_calculate_file_command};
use carbon_calc::factors::EMISSION_FACTORS;
use carbon_calc::log::is_logger_initialised;
use carbon_calc::settings::Settings;
use float_cmp::approx_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};

/// Get the path to an example event file.
fn get_event_path(file_name: &str) -> PathBuf {
    Path::new("tests/data").join(file_name)
}

#[rstest]
#[case("physical_event.toml", 0.254 * 1000.0 + 0.164 * 1000.0 + 5.0 * 2.0 * 40.0 + 2.4 * 1000.0)]
#[case("virtual_event.toml", 0.20707 * 1000.0 + 0.233 * 150.0 + 7.06 * 20.0)]
fn test_event_files(#[case] file_name: &str, #[case] expected: f64) {
    let input = CalculationInput::from_path(&get_event_path(file_name)).unwrap();
    let total = calculate(&input, &EMISSION_FACTORS).unwrap();
    assert!(approx_eq!(f64, total.value(), expected, epsilon = 1e-9));
}

/// An integration test for the `calculate file` command.
///
/// We also check that the logger is initialised after it is run.
#[test]
fn test_handle_calculate_file_command() {
    unsafe { std::env::set_var("CARBON_CALC_LOG_LEVEL", "off") };

    assert!(!is_logger_initialised());

    let opts = CalculateOpts { breakdown: false };
    handle_calculate_file_command(
        &get_event_path("physical_event.toml"),
        &opts,
        Some(Settings::default()),
    )
    .unwrap();

    assert!(is_logger_initialised());
}
