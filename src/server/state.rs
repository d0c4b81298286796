//! Server state and configuration.

use std::sync::Arc;

use crate::spooler::Spooler;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:5000")
    pub listen_addr: String,
}

/// Application state shared across handlers.
pub struct AppState {
    /// Handle to the host printing subsystem.
    pub spooler: Arc<dyn Spooler>,
}

impl AppState {
    pub fn new(spooler: Arc<dyn Spooler>) -> Self {
        Self { spooler }
    }
}
