//! # Etiqueta CLI
//!
//! Command-line interface for the DYMO label print proxy.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP print proxy on the default 0.0.0.0:5000
//! etiqueta serve
//!
//! # Listen somewhere else (flags override the HOST/PORT environment)
//! etiqueta serve --host 127.0.0.1 --port 8631
//!
//! # Show the printer directory and where /print would send labels
//! etiqueta printers
//! ```

use clap::{Parser, Subcommand};

use etiqueta::EtiquetaError;
use etiqueta::job;
use etiqueta::server::{self, ServerConfig};
use etiqueta::spooler::{CupsSpooler, Spooler};

/// Etiqueta - HTTP print proxy for DYMO label printers
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP print proxy
    Serve {
        /// Host to listen on
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },

    /// List printers known to the printing subsystem
    Printers,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), EtiquetaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            server::serve(ServerConfig {
                listen_addr: format!("{}:{}", host, port),
            })
            .await
        }
        Commands::Printers => list_printers().await,
    }
}

/// Show the directory, the system default, and the resolved target.
async fn list_printers() -> Result<(), EtiquetaError> {
    let outcome = tokio::task::spawn_blocking(|| {
        let spooler = CupsSpooler::new();
        let printers = spooler.printers()?;
        let default = spooler.default_printer()?;
        let target = job::resolve_printer(&spooler);
        Ok::<_, EtiquetaError>((printers, default, target))
    })
    .await
    .map_err(|e| EtiquetaError::SubsystemUnavailable(format!("Task error: {}", e)))?;

    let (printers, default, target) = outcome?;

    if printers.is_empty() {
        println!("No printers found.");
    } else {
        println!("Printers:");
        for printer in &printers {
            println!("  {} ({})", printer.name, printer.state);
        }
    }

    if let Some(default) = default {
        println!("System default: {}", default);
    }

    match target {
        Ok(name) => println!("Labels will print to: {}", name),
        Err(e) => println!("No usable printer: {}", e),
    }

    Ok(())
}
