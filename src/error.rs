//! Errors of the file-system and configuration surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("FileNotFound: {0}")]
    FileNotFound(String),
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("Failed to parse document {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Document has no id: {0}")]
    MissingId(String),
}

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("NoFilesFound")]
    NoFilesFound { guidance: String },
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("WriteFailed: {0}")]
    WriteFailed(String),
}

/// Umbrella error for the binary; the core itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl Error {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Enumerate(_) | Error::Load(_) => 1,
            Error::Config(_) => 3,
            Error::Emit(_) => 6,
        }
    }
}
