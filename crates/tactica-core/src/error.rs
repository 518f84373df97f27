use thiserror::Error;

/// Top-level error type for Tactica.
#[derive(Debug, Error)]
pub enum TacticaError {
    /// A tactic name or keyword set was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// Classification was requested against a column the table does not have.
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed dictionary file.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
