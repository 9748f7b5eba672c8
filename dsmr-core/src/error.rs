use thiserror::Error;

/// Main error type for DSMR COSEM parsing
#[derive(Error, Debug)]
pub enum DsmrError {
    #[error("Invalid OBIS identifier: {0}")]
    ObisParse(String),

    #[error("Unsupported number of values: {0}")]
    ValueCountMismatch(String),

    #[error("Value decode error: {0}")]
    ValueDecode(String),

    #[error("No known COSEM object for OBIS identifier: {0}")]
    UnknownObis(String),
}

/// Result type alias for DSMR COSEM operations
pub type DsmrResult<T> = Result<T, DsmrError>;
