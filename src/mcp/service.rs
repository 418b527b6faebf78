//! MCP Streamable HTTP service creation
//!
//! HTTP mode is stateless: every request gets its own service, server and
//! client, so nothing is shared between concurrent requests.

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::server::HackMdServer;
use crate::hackmd::HackMdClient;

/// Create a stateless MCP Streamable HTTP service for a single request
///
/// # Arguments
/// * `client` - HackMD client built from the request's resolved configuration
/// * `cancellation_token` - Cancelled to tear the service down
///
/// # Returns
/// A StreamableHttpService that implements tower::Service
pub fn create_mcp_service(
    client: HackMdClient,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<HackMdServer, LocalSessionManager> {
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<HackMdServer, std::io::Error> {
        Ok(HackMdServer::new(client.clone()))
    };

    // Any Host is accepted; exposure is decided by the bind address.
    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(false)
        .with_cancellation_token(cancellation_token)
        .disable_allowed_hosts();

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
