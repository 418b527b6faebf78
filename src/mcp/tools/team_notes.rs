//! Team note tools.
//!
//! Same operations as the personal note tools, scoped by a team path.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{pretty, wrap_result};
use crate::hackmd::{CreateNoteOptions, UpdateNoteOptions};
use crate::mcp::HackMdServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamNotesParams {
    #[schemars(description = "Team path")]
    pub team_path: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamNoteParams {
    #[schemars(description = "Team path")]
    pub team_path: String,
    #[schemars(description = "Create note options")]
    pub payload: CreateNoteOptions,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamNoteParams {
    #[schemars(description = "Team path")]
    pub team_path: String,
    #[schemars(description = "Note ID")]
    pub note_id: String,
    #[schemars(description = "Update note options")]
    pub payload: UpdateNoteOptions,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTeamNoteParams {
    #[schemars(description = "Team path")]
    pub team_path: String,
    #[schemars(description = "Note ID")]
    pub note_id: String,
}

#[tool_router(router = team_notes_router, vis = "pub(crate)")]
impl HackMdServer {
    #[tool(
        description = "List all notes in a team",
        annotations(
            title = "Get a list of notes in a Team's workspace",
            read_only_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn list_team_notes(
        &self,
        params: Parameters<ListTeamNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = "list_team_notes", team_path = %params.0.team_path, "tool call");
        let outcome = self.client().get_team_notes(&params.0.team_path).await;
        Ok(wrap_result("list_team_notes", outcome, pretty))
    }

    #[tool(
        description = "Create a new note in a team",
        annotations(
            title = "Create a note in a Team workspace",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    pub async fn create_team_note(
        &self,
        params: Parameters<CreateTeamNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateTeamNoteParams { team_path, payload } = params.0;
        debug!(tool = "create_team_note", team_path = %team_path, "tool call");

        let outcome = self.client().create_team_note(&team_path, &payload).await;
        Ok(wrap_result("create_team_note", outcome, |note| {
            Ok(format!("Team note created successfully:\n{}", pretty(note)?))
        }))
    }

    #[tool(
        description = "Update an existing note in a team",
        annotations(
            title = "Update a note in a Team's workspace",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    pub async fn update_team_note(
        &self,
        params: Parameters<UpdateTeamNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateTeamNoteParams {
            team_path,
            note_id,
            payload,
        } = params.0;
        debug!(tool = "update_team_note", team_path = %team_path, note_id = %note_id, "tool call");

        let outcome = self
            .client()
            .update_team_note(&team_path, &note_id, &payload)
            .await;
        Ok(wrap_result("update_team_note", outcome, |result| {
            Ok(format!(
                "Team note {note_id} updated successfully:\n{}",
                pretty(result)?
            ))
        }))
    }

    #[tool(
        description = "Delete a note in a team",
        annotations(
            title = "Delete a note in a Team's workspace",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn delete_team_note(
        &self,
        params: Parameters<DeleteTeamNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let DeleteTeamNoteParams { team_path, note_id } = params.0;
        debug!(tool = "delete_team_note", team_path = %team_path, note_id = %note_id, "tool call");

        let outcome = self.client().delete_team_note(&team_path, &note_id).await;
        Ok(wrap_result("delete_team_note", outcome, |result| {
            Ok(format!(
                "Team note {note_id} deleted successfully:\n{}",
                pretty(result)?
            ))
        }))
    }
}
