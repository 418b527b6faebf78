//! Request payloads accepted by the HackMD API.
//!
//! Responses are not modelled; they pass through as JSON.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Who may read or write a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotePermissionRole {
    Owner,
    SignedIn,
    Guest,
}

/// Who may comment on a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommentPermissionType {
    Disabled,
    Forbidden,
    Owners,
    SignedInUsers,
    Everyone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteOptions {
    #[schemars(description = "Note title")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "Note content")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[schemars(description = "Read permission")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_permission: Option<NotePermissionRole>,
    #[schemars(description = "Write permission")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_permission: Option<NotePermissionRole>,
    #[schemars(description = "Comment permission")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_permission: Option<CommentPermissionType>,
    #[schemars(description = "Custom permalink")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteOptions {
    #[schemars(description = "New note content")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[schemars(description = "Read permission")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_permission: Option<NotePermissionRole>,
    #[schemars(description = "Write permission")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_permission: Option<NotePermissionRole>,
    #[schemars(description = "Custom permalink")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}
