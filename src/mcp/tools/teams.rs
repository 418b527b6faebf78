//! Team tools.

use rmcp::{ErrorData as McpError, model::CallToolResult, tool, tool_router};
use tracing::debug;

use super::{pretty, wrap_result};
use crate::mcp::HackMdServer;

#[tool_router(router = teams_router, vis = "pub(crate)")]
impl HackMdServer {
    #[tool(
        description = "List all teams accessible to the user",
        annotations(
            title = "Get a list of the teams to which the user has permission",
            read_only_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn list_teams(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "list_teams", "tool call");
        let outcome = self.client().get_teams().await;
        Ok(wrap_result("list_teams", outcome, pretty))
    }
}
