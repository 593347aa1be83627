use thiserror::Error;

/// All library-level errors. The ordering pipeline itself is total over its
/// input; everything here belongs to the parsing boundary in front of it.
#[derive(Error, Debug)]
pub enum OoxError {
    #[error("Invalid function code: {0}")]
    InvalidFunctionCode(String),

    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, OoxError>;
