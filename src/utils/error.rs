use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Seed file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CandidateError {
    /// Whether the error came from the filesystem or the CSV encoder rather than from bad input.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::IoError(_) | Self::CsvError(_))
    }
}

pub type Result<T> = std::result::Result<T, CandidateError>;
