//! Error type shared by the engine, the runner and the command line.

#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("ConfigurationError: {0}")]
    Configuration(String),
    #[error("DegenerateFitnessError: total_distance={distance}")]
    DegenerateFitness { distance: f64 },
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("ParseError: line={line}, {message}")]
    Parse { line: usize, message: String },
}

impl GaError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        GaError::Configuration(message.into())
    }

    /// Returns `true` for configuration failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GaError::Configuration(_))
    }
}
