//! API route configuration.

use axum::Router;
use axum::routing::{get, post};

use super::handlers;
use super::state::AppState;

/// Create the HTTP router.
///
/// `POST /mcp` serves MCP; `GET`/`DELETE /mcp` are answered with a JSON-RPC
/// "method not allowed" error because the endpoint is stateless.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/mcp",
            post(handlers::handle_mcp)
                .get(handlers::method_not_allowed)
                .delete(handlers::method_not_allowed),
        )
        .with_state(state)
}
