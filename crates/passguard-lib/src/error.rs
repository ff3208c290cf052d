// crates/passguard-lib/src/error.rs

//! Central error type.
//!
//! Password validation never fails; these are errors from the layers around it
//! (settings, I/O).
use thiserror::Error;

/// Application error types with error codes
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CFG_001",
            AppError::InvalidPolicy(_) => "POL_001",
            AppError::InvalidInput(_) => "VAL_001",
            AppError::Io(_) => "IO_001",
        }
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::Config(Box::new(err))
    }
}
