//! Profile tools.

use rmcp::{ErrorData as McpError, model::CallToolResult, tool, tool_router};
use tracing::debug;

use super::{pretty, wrap_result};
use crate::mcp::HackMdServer;

#[tool_router(router = profile_router, vis = "pub(crate)")]
impl HackMdServer {
    #[tool(
        description = "Get information about the authenticated user",
        annotations(
            title = "Get user information",
            read_only_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn get_user_info(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "get_user_info", "tool call");
        let outcome = self.client().get_me().await;
        Ok(wrap_result("get_user_info", outcome, pretty))
    }
}
