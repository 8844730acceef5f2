//! Integration tests for the `calculate file` command when the event file can't be read.
use carbon_calc::cli::{CalculateOpts, handle_calculate_file_command};
use carbon_calc::settings::Settings;
use tempfile::tempdir;

#[test]
fn test_handle_calculate_file_command_missing_file() {
    unsafe { std::env::set_var("CARBON_CALC_LOG_LEVEL", "off") };

    let dir = tempdir().unwrap();
    let opts = CalculateOpts { breakdown: false };
    let err = handle_calculate_file_command(
        &dir.path().join("missing.toml"),
        &opts,
        Some(Settings::default()),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Failed to load event.");
}
