use rmcp::{ErrorData as McpError, model::CallToolResult, tool, tool_router};
use tracing::debug;

use super::{pretty, wrap_result};
use crate::mcp::HackMdServer;

#[tool_router(router = history_router, vis = "pub(crate)")]
impl HackMdServer {
    #[tool(
        description = "Get user's reading history",
        annotations(
            title = "Get a history of read notes",
            read_only_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn get_history(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "get_history", "tool call");
        let outcome = self.client().get_history().await;
        Ok(wrap_result("get_history", outcome, pretty))
    }
}
