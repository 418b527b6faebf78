//! Stdio transport bootstrap.

use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};

use super::server::HackMdServer;
use crate::config::EnvConfig;
use crate::error::{AppError, AppResult};
use crate::hackmd::HackMdClient;

/// Serve one MCP session over stdin/stdout until the peer disconnects.
///
/// The token is checked before anything else is constructed, so a missing
/// `HACKMD_API_TOKEN` fails without touching the standard streams.
pub async fn serve_stdio(env: &EnvConfig) -> AppResult<()> {
    let config = env.stdio_config()?;
    let client = HackMdClient::new(&config)?;
    let server = HackMdServer::new(client);

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("MCP serve error: {:?}", e);
        AppError::Transport {
            message: e.to_string(),
        }
    })?;
    info!(api_url = %config.api_url, "MCP Server running in stdio mode");

    service.waiting().await.map_err(|e| AppError::Transport {
        message: e.to_string(),
    })?;
    Ok(())
}
