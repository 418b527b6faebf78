//! MCP server implementation
//!
//! One server instance wraps one HackMD client. In stdio mode a single
//! instance lives for the whole process; in HTTP mode a fresh one is built for
//! every request.

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::hackmd::HackMdClient;

/// MCP server exposing the HackMD API as tools.
///
/// The tool router is assembled once at construction from the per-area
/// routers in [`super::tools`] and never changes afterwards.
#[derive(Clone)]
pub struct HackMdServer {
    client: HackMdClient,
    tool_router: ToolRouter<Self>,
}

impl HackMdServer {
    /// Create a new MCP server backed by the given client
    pub fn new(client: HackMdClient) -> Self {
        Self {
            client,
            tool_router: Self::profile_router()
                + Self::teams_router()
                + Self::history_router()
                + Self::user_notes_router()
                + Self::team_notes_router(),
        }
    }

    pub fn client(&self) -> &HackMdClient {
        &self.client
    }

    /// Get the tool router for this server
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HackMdServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "HackMD MCP Server - Read and manage HackMD notes, teams, and reading history",
            )
    }
}
