//! HTTP transport: a stateless Streamable HTTP MCP endpoint at `/mcp`.

mod error;
mod handlers;
mod routes;
mod state;


use std::any::Any;
use std::net::IpAddr;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::EnvConfig;
use crate::error::AppResult;

pub use error::{ApiError, JSONRPC_INTERNAL_ERROR, JsonRpcError, JsonRpcErrorResponse};
pub use handlers::{HealthResponse, McpQuery};
pub use routes::create_router;
pub use state::AppState;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8081;

const MCP_SESSION_ID: HeaderName = HeaderName::from_static("mcp-session-id");
const API_TOKEN: HeaderName = HeaderName::from_static("hackmd-api-token");
const API_URL: HeaderName = HeaderName::from_static("hackmd-api-url");

/// HTTP server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

/// Build the full application: routes plus CORS, tracing and panic handling.
pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    create_router(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// CORS policy for browser-based MCP clients.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, MCP_SESSION_ID, API_TOKEN, API_URL])
        .expose_headers([MCP_SESSION_ID, API_TOKEN, API_URL])
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Error handling MCP request");
    ApiError::Internal.into_response()
}

/// Run the HTTP server until Ctrl-C.
pub async fn run(config: Config, env: EnvConfig) -> AppResult<()> {
    let cancellation_token = CancellationToken::new();
    let state = AppState::new(env, cancellation_token.clone());
    let app = build_app(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP HTTP Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            cancellation_token.cancel();
        })
        .await?;
    Ok(())
}
