//! # HTTP Server for Label Printing
//!
//! Exposes the print proxy over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! etiqueta serve --host 0.0.0.0 --port 5000
//! ```
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/health` | GET | Subsystem reachability + known printer names |
//! | `/print` | POST | Submit raw label bytes as a print job |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::EtiquetaError;
use crate::spooler::CupsSpooler;

/// Upper bound on label payloads (label files are a few KB)
const MAX_LABEL_BYTES: usize = 1024 * 1024;

/// Build the application router around `state`.
///
/// Split out from [`serve`] so tests can drive the routes in-process with a
/// scripted [`Spooler`](crate::spooler::Spooler).
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/print",
            post(handlers::print::print).layer(DefaultBodyLimit::max(MAX_LABEL_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server against the host CUPS scheduler.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), etiqueta::error::EtiquetaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:5000".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), EtiquetaError> {
    let state = Arc::new(AppState::new(Arc::new(CupsSpooler::new())));
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "print proxy listening");

    axum::serve(listener, router).await?;

    Ok(())
}
