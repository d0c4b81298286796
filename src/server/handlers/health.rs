//! Health probe handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use super::super::state::AppState;

/// Body returned when the printing subsystem is reachable.
#[derive(Debug, Serialize)]
struct HealthOk {
    status: &'static str,
    printers: Vec<String>,
}

/// Body returned when the subsystem cannot be queried.
#[derive(Debug, Serialize)]
struct HealthError {
    status: &'static str,
    error: String,
}

/// Handle GET /health - report subsystem reachability and known printers.
///
/// Printer names are reported in the order the subsystem enumerates them.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    // Query the subsystem (blocking operation, run in separate thread)
    let spooler = state.spooler.clone();
    let result = tokio::task::spawn_blocking(move || spooler.printers()).await;

    match result {
        Ok(Ok(printers)) => (
            StatusCode::OK,
            Json(HealthOk {
                status: "ok",
                printers: printers.into_iter().map(|p| p.name).collect(),
            }),
        )
            .into_response(),
        Ok(Err(e)) => {
            error!("Health check failed: {}", e);
            error_response(e.to_string())
        }
        Err(e) => {
            error!("Health check task failed: {}", e);
            error_response(format!("Task error: {}", e))
        }
    }
}

/// Generate error response JSON.
fn error_response(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(HealthError {
            status: "error",
            error,
        }),
    )
        .into_response()
}
