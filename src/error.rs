//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// The printing subsystem could not be reached or queried
    #[error("Printing subsystem unavailable: {0}")]
    SubsystemUnavailable(String),

    /// No DYMO printer in the directory and no system default configured
    #[error("No printer found: no DYMO printer and no system default")]
    NoPrinterFound,

    /// Unable to create or write the temporary spool file
    #[error("Failed to stage label: {0}")]
    StagingFailed(String),

    /// The printing subsystem rejected the submitted job
    #[error("Print job rejected: {0}")]
    SubmissionFailed(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
