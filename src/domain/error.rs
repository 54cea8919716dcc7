//! Domain error types.

use super::reconcile::MisalignedInputError;
use super::shortfall::InsufficientDataError;

/// Top-level error type for reconwatch.
#[derive(Debug, thiserror::Error)]
pub enum ReconwatchError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    MisalignedInput(#[from] MisalignedInputError),

    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ReconwatchError> for std::process::ExitCode {
    fn from(err: &ReconwatchError) -> Self {
        let code: u8 = match err {
            ReconwatchError::Io(_) => 1,
            ReconwatchError::ConfigParse { .. }
            | ReconwatchError::ConfigMissing { .. }
            | ReconwatchError::ConfigInvalid { .. } => 2,
            ReconwatchError::Data { .. } => 3,
            ReconwatchError::MisalignedInput(_) => 4,
            ReconwatchError::InsufficientData(_) => 5,
        };
        std::process::ExitCode::from(code)
    }
}
