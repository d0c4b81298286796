//! Label printing handler.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::job;
use crate::spooler::JobId;

use super::super::state::AppState;

/// Body returned after a successful submission.
#[derive(Debug, Serialize)]
struct PrintOk {
    ok: bool,
    message: &'static str,
    job_id: JobId,
}

/// Body returned when any step of the submission failed.
#[derive(Debug, Serialize)]
struct PrintError {
    ok: bool,
    error: String,
}

/// Handle POST /print - stage the raw body and submit it as a print job.
///
/// The body is treated as an opaque blob; no label validation happens here.
pub async fn print(State(state): State<Arc<AppState>>, payload: Bytes) -> Response {
    // Stage and submit (blocking operations, run in separate thread)
    let spooler = state.spooler.clone();
    let result =
        tokio::task::spawn_blocking(move || job::submit(spooler.as_ref(), &payload)).await;

    match result {
        Ok(Ok(job_id)) => {
            info!(job_id, "label sent to printer");
            (
                StatusCode::OK,
                Json(PrintOk {
                    ok: true,
                    message: "Label sent to printer",
                    job_id,
                }),
            )
                .into_response()
        }
        Ok(Err(e)) => {
            error!("Print error: {}", e);
            error_response(e.to_string())
        }
        Err(e) => {
            error!("Print task failed: {}", e);
            error_response(format!("Task error: {}", e))
        }
    }
}

/// Generate error response JSON.
fn error_response(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(PrintError { ok: false, error }),
    )
        .into_response()
}
