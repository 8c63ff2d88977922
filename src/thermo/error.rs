//! Error types for Thermo RAW file access.

use thiserror::Error;

use crate::accessor::AccessorError;

/// Errors that can occur while opening or reading a Thermo RAW file.
#[derive(Error, Debug)]
pub enum ThermoError {
    /// Error opening the RAW file (file not found, invalid format, etc.)
    #[error("Failed to open RAW file: {0}")]
    OpenError(String),

    /// Error reading record data from the file
    #[error("Record read error: {0}")]
    ReadError(String),

    /// Missing required metadata
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// .NET runtime initialization failed
    #[error(".NET runtime error: {0}")]
    RuntimeError(String),

    /// Platform not supported (e.g., ARM architecture)
    #[error("Platform not supported: {0}. Thermo RAW reading requires x86/x86_64 architecture.")]
    PlatformNotSupported(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ThermoError> for AccessorError {
    fn from(error: ThermoError) -> Self {
        match &error {
            ThermoError::OpenError(_)
            | ThermoError::RuntimeError(_)
            | ThermoError::PlatformNotSupported(_) => AccessorError::open(error.to_string()),
            ThermoError::ReadError(_)
            | ThermoError::MissingData(_)
            | ThermoError::IoError(_) => AccessorError::metadata(error.to_string()),
        }
    }
}
