//! Domain error types.

/// Top-level error type for ruota.
#[derive(Debug, thiserror::Error)]
pub enum RuotaError {
    #[error("schema error in {source_name}: {reason}")]
    Schema { source_name: String, reason: String },

    #[error("failed to read draw data: {reason}")]
    DataRead { reason: String },

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

    #[error("unknown wheel: {0}")]
    UnknownWheel(String),

    #[error("play count {count} out of range ({min}-{max})")]
    InvalidPlayCount { count: usize, min: usize, max: usize },

    #[error("failed to write report {path}: {reason}")]
    ReportWrite { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RuotaError> for std::process::ExitCode {
    fn from(err: &RuotaError) -> Self {
        let code: u8 = match err {
            RuotaError::Io(_) | RuotaError::ReportWrite { .. } => 1,
            RuotaError::ConfigParse { .. }
            | RuotaError::ConfigMissing { .. }
            | RuotaError::ConfigInvalid { .. } => 2,
            RuotaError::Schema { .. } | RuotaError::DataRead { .. } => 3,
            RuotaError::UnknownWheel(_) | RuotaError::InvalidPlayCount { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
