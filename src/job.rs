//! # Print Job Logic
//!
//! The two operations at the heart of the proxy: picking a target printer
//! and submitting a staged payload to it.
//!
//! Printer selection prefers any queue whose name contains `"DYMO"`
//! (case-insensitive), scanning the directory in the order the subsystem
//! reports it. If nothing matches, the system default is used. A DYMO match
//! wins even when a default is explicitly configured.

use crate::error::EtiquetaError;
use crate::spool::SpoolFile;
use crate::spooler::{JobId, Spooler};

/// Vendor substring that marks a preferred printer
pub const VENDOR_MATCH: &str = "DYMO";

/// Title attached to every submitted job
pub const JOB_TITLE: &str = "Label";

/// Number of copies per submission
const COPIES: u32 = 1;

/// Pick the target printer.
///
/// Fetches the directory fresh from the subsystem and returns the first
/// name containing [`VENDOR_MATCH`] (case-insensitive), or the system
/// default when no name matches. Read-only.
///
/// ## Errors
///
/// - [`EtiquetaError::SubsystemUnavailable`] if the directory cannot be
///   fetched
/// - [`EtiquetaError::NoPrinterFound`] if no name matches and no default is
///   configured
pub fn resolve_printer(spooler: &dyn Spooler) -> Result<String, EtiquetaError> {
    let printers = spooler.printers()?;

    for printer in printers {
        if printer.name.to_uppercase().contains(VENDOR_MATCH) {
            return Ok(printer.name);
        }
    }

    spooler
        .default_printer()?
        .ok_or(EtiquetaError::NoPrinterFound)
}

/// Stage `payload` and submit it as a single print job.
///
/// The payload is written to a temporary spool file, the target printer is
/// resolved, and the file is handed to the subsystem with a copies count of
/// one. The spool file is deleted when this returns, whether any step
/// succeeded or failed.
///
/// The payload is forwarded untouched. No label validation happens here; an
/// empty payload is accepted and left for the printer driver to judge.
pub fn submit(spooler: &dyn Spooler, payload: &[u8]) -> Result<JobId, EtiquetaError> {
    let spool = SpoolFile::stage(payload)?;
    let printer = resolve_printer(spooler)?;
    spooler.submit_file(&printer, spool.path(), JOB_TITLE, COPIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spooler::PrinterInfo;
    use pretty_assertions::assert_eq;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Scripted stand-in for the host printing subsystem.
    #[derive(Default)]
    struct FakeSpooler {
        printers: Vec<&'static str>,
        default: Option<&'static str>,
        unreachable: bool,
        reject: Option<&'static str>,
        submitted: Mutex<Vec<Submission>>,
    }

    /// What the fake observed at submit time.
    struct Submission {
        printer: String,
        path: PathBuf,
        staged: Vec<u8>,
        title: String,
        copies: u32,
    }

    impl Spooler for FakeSpooler {
        fn printers(&self) -> Result<Vec<PrinterInfo>, EtiquetaError> {
            if self.unreachable {
                return Err(EtiquetaError::SubsystemUnavailable(
                    "connection refused".to_string(),
                ));
            }
            Ok(self
                .printers
                .iter()
                .map(|name| PrinterInfo {
                    name: name.to_string(),
                    state: "is idle.".to_string(),
                })
                .collect())
        }

        fn default_printer(&self) -> Result<Option<String>, EtiquetaError> {
            Ok(self.default.map(str::to_string))
        }

        fn submit_file(
            &self,
            printer: &str,
            path: &Path,
            title: &str,
            copies: u32,
        ) -> Result<JobId, EtiquetaError> {
            // Record what was on disk while the subsystem could see it.
            self.submitted.lock().unwrap().push(Submission {
                printer: printer.to_string(),
                path: path.to_path_buf(),
                staged: std::fs::read(path).unwrap(),
                title: title.to_string(),
                copies,
            });
            if let Some(reason) = self.reject {
                return Err(EtiquetaError::SubmissionFailed(reason.to_string()));
            }
            Ok(42)
        }
    }

    #[test]
    fn prefers_dymo_over_explicit_default() {
        let spooler = FakeSpooler {
            printers: vec!["HP_LaserJet", "DYMO_LabelWriter_450"],
            default: Some("HP_LaserJet"),
            ..Default::default()
        };
        assert_eq!(resolve_printer(&spooler).unwrap(), "DYMO_LabelWriter_450");
    }

    #[test]
    fn matches_vendor_substring_case_insensitively() {
        for name in ["Dymo450", "MYDYMOPRINTER", "dymo-lw"] {
            let spooler = FakeSpooler {
                printers: vec!["HP_LaserJet", name],
                ..Default::default()
            };
            assert_eq!(resolve_printer(&spooler).unwrap(), name);
        }
    }

    #[test]
    fn falls_back_to_default_when_no_match() {
        let spooler = FakeSpooler {
            printers: vec!["HP_LaserJet"],
            default: Some("HP_LaserJet"),
            ..Default::default()
        };
        assert_eq!(resolve_printer(&spooler).unwrap(), "HP_LaserJet");
    }

    #[test]
    fn empty_directory_without_default_fails() {
        let spooler = FakeSpooler::default();
        assert!(matches!(
            resolve_printer(&spooler),
            Err(EtiquetaError::NoPrinterFound)
        ));
    }

    #[test]
    fn no_match_and_no_default_fails() {
        let spooler = FakeSpooler {
            printers: vec!["HP_LaserJet", "Brother_QL"],
            ..Default::default()
        };
        assert!(matches!(
            resolve_printer(&spooler),
            Err(EtiquetaError::NoPrinterFound)
        ));
    }

    #[test]
    fn directory_failure_propagates() {
        let spooler = FakeSpooler {
            unreachable: true,
            ..Default::default()
        };
        assert!(matches!(
            resolve_printer(&spooler),
            Err(EtiquetaError::SubsystemUnavailable(_))
        ));
    }

    #[test]
    fn submit_stages_exact_payload() {
        let spooler = FakeSpooler {
            printers: vec!["DYMO_LabelWriter_450"],
            ..Default::default()
        };
        let payload = b"^XA^FO50,50^A0N,50,50^FDTest^FS^XZ";

        assert_eq!(submit(&spooler, payload).unwrap(), 42);

        let submitted = spooler.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].printer, "DYMO_LabelWriter_450");
        assert_eq!(submitted[0].staged, payload);
        assert_eq!(submitted[0].title, JOB_TITLE);
        assert_eq!(submitted[0].copies, 1);
    }

    #[test]
    fn submit_accepts_empty_payload() {
        let spooler = FakeSpooler {
            printers: vec!["DYMO_LabelWriter_450"],
            ..Default::default()
        };

        assert_eq!(submit(&spooler, b"").unwrap(), 42);
        assert_eq!(spooler.submitted.lock().unwrap()[0].staged, b"");
    }

    #[test]
    fn spool_file_is_gone_after_success() {
        let spooler = FakeSpooler {
            printers: vec!["DYMO_LabelWriter_450"],
            ..Default::default()
        };

        submit(&spooler, b"label").unwrap();

        let submitted = spooler.submitted.lock().unwrap();
        assert!(!submitted[0].path.exists());
    }

    #[test]
    fn spool_file_is_gone_after_rejection() {
        let spooler = FakeSpooler {
            printers: vec!["DYMO_LabelWriter_450"],
            reject: Some("printer offline"),
            ..Default::default()
        };

        let err = submit(&spooler, b"label").unwrap_err();
        assert!(matches!(
            &err,
            EtiquetaError::SubmissionFailed(msg) if msg == "printer offline"
        ));

        let submitted = spooler.submitted.lock().unwrap();
        assert!(!submitted[0].path.exists());
    }

    #[test]
    fn resolution_failure_aborts_before_submission() {
        let spooler = FakeSpooler {
            unreachable: true,
            ..Default::default()
        };

        assert!(matches!(
            submit(&spooler, b"label"),
            Err(EtiquetaError::SubsystemUnavailable(_))
        ));
        assert!(spooler.submitted.lock().unwrap().is_empty());
    }
}
