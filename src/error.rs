use thiserror::Error;

pub type LiftResult<T> = Result<T, LiftError>;

#[derive(Error, Debug)]
pub enum LiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file type '{extension}': expected one of {allowed}")]
    InvalidFileType { extension: String, allowed: String },

    #[error("File too large: {size} bytes (maximum is {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Failed to parse '{file}': {message}")]
    ParseFailure { file: String, message: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid wizard transition: {0}")]
    InvalidTransition(String),
}
