//! MCP tool implementations
//!
//! Tools are grouped by API area. Each module contributes one `#[tool_router]`
//! block on [`HackMdServer`](super::HackMdServer); the server sums them into a
//! single immutable router.
//!
//! Every handler returns `Ok`: upstream failures are reported through the
//! tool result (`isError: true`) so the calling agent can see them.

mod history;
mod profile;
mod team_notes;
mod teams;
mod user_notes;


pub use team_notes::{
    CreateTeamNoteParams, DeleteTeamNoteParams, ListTeamNotesParams, UpdateTeamNoteParams,
};
pub use user_notes::{CreateNoteParams, DeleteNoteParams, GetNoteParams, UpdateNoteParams};

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::hackmd::{HackMdError, HackMdResult};

/// Wrap the outcome of one API call into a single text content block.
///
/// `render` turns the upstream JSON into the success text; a rendering
/// failure is reported the same way as an API failure.
pub(crate) fn wrap_result<F>(tool: &str, outcome: HackMdResult<Value>, render: F) -> CallToolResult
where
    F: FnOnce(&Value) -> Result<String, serde_json::Error>,
{
    match outcome.and_then(|value| render(&value).map_err(HackMdError::from)) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            warn!(tool, error = %err, "HackMD API call failed");
            CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
        }
    }
}

pub(crate) fn pretty(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
