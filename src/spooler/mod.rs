//! # Printing Subsystem Client
//!
//! This module provides access to the host's print spooler: enumerating
//! installed printers and submitting print jobs.
//!
//! The [`Spooler`] trait is the seam between the core print logic and the
//! host printing subsystem. The resolver and submitter only ever see the
//! trait, so they can run against a scripted fake in tests with no real
//! printer present.
//!
//! ## Available Backends
//!
//! - [`cups`]: CUPS command-line tools (`lpstat`, `lp`)

pub mod cups;

pub use cups::CupsSpooler;

use std::path::Path;

use crate::error::EtiquetaError;

/// Job identifier assigned by the printing subsystem.
pub type JobId = u32;

/// A single entry in the printer directory.
#[derive(Debug, Clone)]
pub struct PrinterInfo {
    /// Queue name, e.g. "DYMO_LabelWriter_450"
    pub name: String,

    /// Free-form state description as reported by the subsystem
    pub state: String,
}

/// Access to the host printing subsystem.
///
/// Every method performs a fresh query; nothing is cached between calls.
/// All methods block on local I/O and are expected to run on a blocking
/// thread when called from async context.
pub trait Spooler: Send + Sync {
    /// Enumerate the printer directory, in the order the subsystem reports it.
    fn printers(&self) -> Result<Vec<PrinterInfo>, EtiquetaError>;

    /// The configured default printer, if any.
    fn default_printer(&self) -> Result<Option<String>, EtiquetaError>;

    /// Submit the file at `path` as a print job on `printer`.
    ///
    /// Returns the job identifier assigned by the subsystem.
    fn submit_file(
        &self,
        printer: &str,
        path: &Path,
        title: &str,
        copies: u32,
    ) -> Result<JobId, EtiquetaError>;
}
