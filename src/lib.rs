//! Estimate the greenhouse-gas emissions of physical and virtual events.
//!
//! Emissions are calculated as a weighted sum of activity quantities (distances travelled,
//! electricity used, etc.), using the fixed factors in [`factors::EMISSION_FACTORS`].
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod activity;
pub mod calculator;
pub mod cli;
pub mod factors;
pub mod input;
pub mod log;
pub mod report;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get config dir for program.
///
/// If the platform has no config dir, the current directory is used instead.
pub fn get_carbon_calc_config_dir() -> PathBuf {
    let Some(mut config_dir) = dirs::config_dir() else {
        return PathBuf::new();
    };
    config_dir.push("carbon-calc");

    config_dir
}
