//! Error types for isoline extraction.

use thiserror::Error;

/// Result type alias using IsolineError.
pub type IsolineResult<T> = Result<T, IsolineError>;

/// Missing or structurally invalid input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Coordinate source is missing or empty")]
    EmptySource,

    #[error("Scalar field is empty")]
    EmptyField,

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Scalar field contains no finite values")]
    NoFiniteValues,

    #[error("Required field is missing: {0}")]
    MissingField(String),
}

/// Invalid banding or preset configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Band interval must be positive, got {0}")]
    NonPositiveInterval(f64),

    #[error("Smoothing factor must lie in [0, 1), got {0}")]
    InvalidSmoothing(f64),

    #[error("Band start must be finite, got {0}")]
    NonFiniteStart(f64),

    #[error("Invalid group preset: {0}")]
    InvalidPreset(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to read configuration: {0}")]
    IoError(String),
}

/// Invalid mutation of an isolines collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectionError {
    #[error("Group name is empty")]
    EmptyGroupName,

    #[error("Group already exists: {0}")]
    GroupExists(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Isoline {index} not found in group '{group}' ({len} isolines)")]
    IsolineNotFound {
        group: String,
        index: usize,
        len: usize,
    },
}

/// Primary error type for isoline operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsolineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl IsolineError {
    /// Stable category code for reporting to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            IsolineError::Data(_) => "DataError",
            IsolineError::Config(_) => "ConfigError",
            IsolineError::Collection(_) => "CollectionError",
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}
