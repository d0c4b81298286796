//! # Etiqueta - DYMO Label Print Proxy
//!
//! Etiqueta is a small HTTP service that accepts raw label-printer data and
//! forwards it to a locally attached DYMO printer through CUPS. It provides:
//!
//! - **Printer resolution**: prefer a DYMO-named queue, fall back to the
//!   system default
//! - **Spool staging**: payloads go to uniquely named temp files that are
//!   always cleaned up
//! - **Job submission**: one CUPS job per request, job id reported back
//! - **Health probe**: subsystem reachability plus the known printer names
//!
//! ## Quick Start
//!
//! ```no_run
//! use etiqueta::job;
//! use etiqueta::spooler::CupsSpooler;
//!
//! let spooler = CupsSpooler::new();
//!
//! // Send a label file to the resolved printer
//! let payload = std::fs::read("shipping.lbl")?;
//! let job_id = job::submit(&spooler, &payload)?;
//! println!("queued as job {}", job_id);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`job`] | Printer resolution and job submission |
//! | [`spool`] | Temporary spool file staging |
//! | [`spooler`] | Printing subsystem backends |
//! | [`server`] | HTTP server (`/health`, `/print`) |
//! | [`error`] | Error types |

pub mod error;
pub mod job;
pub mod server;
pub mod spool;
pub mod spooler;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use spooler::{CupsSpooler, Spooler};
