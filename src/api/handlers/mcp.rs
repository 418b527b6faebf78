//! `/mcp` endpoint handlers.

use axum::{
    body::Body,
    extract::{Query, Request, State, rejection::QueryRejection},
    response::Response,
};
use futures_util::StreamExt;
use serde::Deserialize;
use tokio_util::sync::DropGuard;
use tower::ServiceExt;
use tracing::{error, info, instrument};

use crate::api::{ApiError, AppState};
use crate::config::{ConfigError, resolve_request_config};
use crate::hackmd::HackMdClient;
use crate::mcp::create_mcp_service;

/// Query parameters accepted on `POST /mcp`.
#[derive(Debug, Default, Deserialize)]
pub struct McpQuery {
    /// Base64-encoded JSON configuration.
    pub config: Option<String>,
}

/// Handle one stateless MCP request.
///
/// Resolves the configuration, builds a fresh client/server/service for this
/// request and forwards the request to it. The service is cancelled once the
/// response body is dropped, whether it was fully sent or the client went
/// away.
#[instrument(skip_all)]
pub async fn handle_mcp(
    State(state): State<AppState>,
    query: Result<Query<McpQuery>, QueryRejection>,
    request: Request,
) -> Result<Response, ApiError> {
    let config = query
        .map_err(|rejection| ConfigError::InvalidEncodedConfig {
            message: rejection.body_text(),
        })
        .and_then(|Query(query)| {
            resolve_request_config(request.headers(), query.config.as_deref(), state.env())
        })
        .inspect_err(|e| info!(error = %e, "Rejected MCP request"))?;

    let client = HackMdClient::new(&config).map_err(|e| {
        error!(error = %e, "Failed to create HackMD client");
        ApiError::Internal
    })?;

    let cancellation_token = state.cancellation_token().child_token();
    let service = create_mcp_service(client, cancellation_token.clone());

    let response = match service.oneshot(request).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Error handling MCP request");
            return Err(ApiError::Internal);
        }
    };

    Ok(cancel_on_close(
        response.map(Body::new),
        cancellation_token.drop_guard(),
    ))
}

/// SSE streaming and session termination do not exist in stateless mode.
#[instrument]
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Tie `guard` to the lifetime of the response body.
fn cancel_on_close(response: Response, guard: DropGuard) -> Response {
    let (parts, body) = response.into_parts();
    let stream = body.into_data_stream().map(move |chunk| {
        let _keep_alive = &guard;
        chunk
    });
    Response::from_parts(parts, Body::from_stream(stream))
}
