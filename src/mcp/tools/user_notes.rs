//! Personal note tools.
//!
//! Handles listing, reading and mutating notes in the user's own workspace.

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

// Parameter types for tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNoteParams {
    #[schemars(description = "Note ID")]
    pub note_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    #[schemars(description = "Create note options")]
    pub payload: CreateNoteOptions,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteParams {
    #[schemars(description = "Note ID")]
    pub note_id: String,
    #[schemars(description = "Update note options")]
    pub payload: UpdateNoteOptions,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteParams {
    #[schemars(description = "Note ID")]
    pub note_id: String,
}

#[tool_router(router = user_notes_router, vis = "pub(crate)")]
impl HackMdServer {
    #[tool(
        description = "List all notes owned by the user",
        annotations(
            title = "Get a list of notes in the user's workspace",
            read_only_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn list_user_notes(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "list_user_notes", "tool call");
        let outcome = self.client().get_note_list().await;
        Ok(wrap_result("list_user_notes", outcome, pretty))
    }

    #[tool(
        description = "Get a note by its ID",
        annotations(title = "Get a note", read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_note(
        &self,
        params: Parameters<GetNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = "get_note", note_id = %params.0.note_id, "tool call");
        let outcome = self.client().get_note(&params.0.note_id).await;
        Ok(wrap_result("get_note", outcome, pretty))
    }

    #[tool(
        description = "Create a new note",
        annotations(
            title = "Create a note",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    pub async fn create_note(
        &self,
        params: Parameters<CreateNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = "create_note", "tool call");
        let outcome = self.client().create_note(&params.0.payload).await;
        Ok(wrap_result("create_note", outcome, |note| {
            Ok(format!("Note created successfully:\n{}", pretty(note)?))
        }))
    }

    #[tool(
        description = "Update an existing note",
        annotations(
            title = "Update a note",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    pub async fn update_note(
        &self,
        params: Parameters<UpdateNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateNoteParams { note_id, payload } = params.0;
        debug!(tool = "update_note", note_id = %note_id, "tool call");

        let outcome = self.client().update_note(&note_id, &payload).await;
        Ok(wrap_result("update_note", outcome, |_| {
            Ok(format!("Note {note_id} updated successfully"))
        }))
    }

    #[tool(
        description = "Delete a note",
        annotations(
            title = "Delete a note",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    pub async fn delete_note(
        &self,
        params: Parameters<DeleteNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        let note_id = params.0.note_id;
        debug!(tool = "delete_note", note_id = %note_id, "tool call");

        let outcome = self.client().delete_note(&note_id).await;
        Ok(wrap_result("delete_note", outcome, |_| {
            Ok(format!("Note {note_id} deleted successfully"))
        }))
    }
}
