//! Application state for the HTTP server.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::EnvConfig;

/// Shared application state.
///
/// Holds only read-only data: the environment snapshot used as the lowest
/// precedence configuration source, and the root cancellation token that
/// every per-request MCP service is parented to.
#[derive(Clone)]
pub struct AppState {
    env: Arc<EnvConfig>,
    cancellation_token: CancellationToken,
}

impl AppState {
    pub fn new(env: EnvConfig, cancellation_token: CancellationToken) -> Self {
        Self {
            env: Arc::new(env),
            cancellation_token,
        }
    }

    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }
}
