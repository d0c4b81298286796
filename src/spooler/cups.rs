//! # CUPS Spooler Backend
//!
//! This module talks to the host CUPS scheduler through its command-line
//! tools: `lpstat` for enumeration and `lp` for job submission. Each call
//! spawns a fresh process, so every operation is an independent connection
//! to the scheduler.
//!
//! ## Printer Setup (Linux)
//!
//! The DYMO queue must be registered with CUPS before the proxy can find it:
//!
//! ```bash
//! # 1. Find the printer URI
//! $ lpinfo -v
//! # Look for something like usb://DYMO/LabelWriter%20450
//!
//! # 2. Register the queue
//! $ sudo lpadmin -p DYMO_LabelWriter_450 -E \
//!       -v "usb://DYMO/LabelWriter%20450" -m everywhere
//!
//! # 3. Verify
//! $ lpstat -p
//! printer DYMO_LabelWriter_450 is idle.  enabled since ...
//! ```

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::EtiquetaError;

use super::{JobId, PrinterInfo, Spooler};

/// # CUPS Spooler
///
/// [`Spooler`] implementation backed by the CUPS command-line tools.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::spooler::{CupsSpooler, Spooler};
///
/// let spooler = CupsSpooler::new();
/// for printer in spooler.printers()? {
///     println!("{}", printer.name);
/// }
/// # Ok::<(), etiqueta::error::EtiquetaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CupsSpooler;

impl CupsSpooler {
    pub fn new() -> Self {
        Self
    }
}

impl Spooler for CupsSpooler {
    fn printers(&self) -> Result<Vec<PrinterInfo>, EtiquetaError> {
        // The parsers depend on the C-locale phrasing of the CUPS tools.
        let output = Command::new("lpstat")
            .env("LC_ALL", "C")
            .arg("-p")
            .output()
            .map_err(|e| {
                EtiquetaError::SubsystemUnavailable(format!("failed to run lpstat: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // lpstat exits nonzero for an empty directory; that is not an
            // unreachable scheduler.
            if stderr.contains("No destinations added") {
                return Ok(Vec::new());
            }
            return Err(EtiquetaError::SubsystemUnavailable(
                stderr.trim().to_string(),
            ));
        }

        let printers = parse_printer_listing(&String::from_utf8_lossy(&output.stdout));
        debug!(count = printers.len(), "enumerated printer directory");
        Ok(printers)
    }

    fn default_printer(&self) -> Result<Option<String>, EtiquetaError> {
        let output = Command::new("lpstat")
            .env("LC_ALL", "C")
            .arg("-d")
            .output()
            .map_err(|e| {
                EtiquetaError::SubsystemUnavailable(format!("failed to run lpstat: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EtiquetaError::SubsystemUnavailable(
                stderr.trim().to_string(),
            ));
        }

        Ok(parse_default_destination(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    fn submit_file(
        &self,
        printer: &str,
        path: &Path,
        title: &str,
        copies: u32,
    ) -> Result<JobId, EtiquetaError> {
        info!(printer, path = %path.display(), "submitting print job");

        let output = Command::new("lp")
            .env("LC_ALL", "C")
            .arg("-d")
            .arg(printer)
            .arg("-n")
            .arg(copies.to_string())
            .arg("-t")
            .arg(title)
            .arg("--")
            .arg(path)
            .output()
            .map_err(|e| {
                EtiquetaError::SubsystemUnavailable(format!("failed to run lp: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EtiquetaError::SubmissionFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let job_id = parse_request_id(&stdout).ok_or_else(|| {
            EtiquetaError::SubmissionFailed(format!(
                "unexpected lp output: {}",
                stdout.trim()
            ))
        })?;

        info!(job_id, "print job accepted");
        Ok(job_id)
    }
}

/// Parse `lpstat -p` output into directory entries.
///
/// Lines look like:
///
/// ```text
/// printer DYMO_LabelWriter_450 is idle.  enabled since Tue 01 Jul 2026
/// printer HP_LaserJet disabled since Mon 30 Jun 2026
/// ```
///
/// Continuation lines (reasons, alerts) are indented and skipped.
fn parse_printer_listing(output: &str) -> Vec<PrinterInfo> {
    output
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("printer ")?;
            let (name, state) = rest.split_once(' ').unwrap_or((rest, ""));
            Some(PrinterInfo {
                name: name.to_string(),
                state: state.trim().to_string(),
            })
        })
        .collect()
}

/// Parse `lpstat -d` output into the default destination, if one is set.
///
/// Prints either `system default destination: <name>` or
/// `no system default destination`.
fn parse_default_destination(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("system default destination:"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Extract the numeric job id from `lp` output.
///
/// ```text
/// request id is DYMO_LabelWriter_450-42 (1 file(s))
/// ```
fn parse_request_id(output: &str) -> Option<JobId> {
    let rest = output.trim().strip_prefix("request id is ")?;
    let request = rest.split_whitespace().next()?;
    let (_, id) = request.rsplit_once('-')?;
    id.parse().ok()
}
