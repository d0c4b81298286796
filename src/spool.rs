//! # Spool File Staging
//!
//! A print job references a file on disk, so the raw payload is staged into
//! a uniquely named temporary file before submission. The file is removed
//! when the [`SpoolFile`] is dropped, which makes cleanup unconditional on
//! every exit path, including early returns and panics.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::EtiquetaError;

/// File name prefix for staged payloads
const SPOOL_PREFIX: &str = "etiqueta-";

/// File name suffix; DYMO label files carry a `.lbl` extension
const SPOOL_SUFFIX: &str = ".lbl";

/// A staged label payload, deleted from disk on drop.
pub struct SpoolFile {
    inner: NamedTempFile,
}

impl SpoolFile {
    /// Write `payload` to a fresh uniquely named temporary file.
    ///
    /// The payload is written in full and flushed before this returns, so
    /// the file is safe to hand to the printing subsystem. An empty payload
    /// stages an empty file.
    ///
    /// ## Errors
    ///
    /// Returns [`EtiquetaError::StagingFailed`] if the file cannot be
    /// created or written (disk full, permission denied).
    pub fn stage(payload: &[u8]) -> Result<Self, EtiquetaError> {
        let mut inner = tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .suffix(SPOOL_SUFFIX)
            .tempfile()
            .map_err(|e| {
                EtiquetaError::StagingFailed(format!("failed to create spool file: {}", e))
            })?;

        inner.write_all(payload).map_err(|e| {
            EtiquetaError::StagingFailed(format!("failed to write spool file: {}", e))
        })?;
        inner.flush().map_err(|e| {
            EtiquetaError::StagingFailed(format!("failed to flush spool file: {}", e))
        })?;

        Ok(Self { inner })
    }

    /// Path to the staged file.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }
}
