//! Configuration validation.
//!
//! Validates config fields before any data is loaded.

use crate::domain::error::ReconwatchError;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), ReconwatchError> {
    validate_path(config, "expected_trades")?;
    validate_path(config, "actual_trades")?;
    validate_path(config, "accounts")?;
    Ok(())
}

pub fn validate_report_config(config: &dyn ConfigPort) -> Result<(), ReconwatchError> {
    // The output key is optional; the CLI falls back to report.txt.
    if let Some(output) = config.get_string("report", "output") {
        if output.trim().is_empty() {
            return Err(ReconwatchError::ConfigInvalid {
                section: "report".to_string(),
                key: "output".to_string(),
                reason: "output must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_path(config: &dyn ConfigPort, key: &str) -> Result<(), ReconwatchError> {
    match config.get_string("data", key) {
        None => Err(ReconwatchError::ConfigMissing {
            section: "data".to_string(),
            key: key.to_string(),
        }),
        Some(value) if value.trim().is_empty() => Err(ReconwatchError::ConfigInvalid {
            section: "data".to_string(),
            key: key.to_string(),
            reason: format!("{} must not be empty", key),
        }),
        Some(_) => Ok(()),
    }
}
