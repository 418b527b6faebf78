//! HackMD REST API adapter.
//!
//! A thin reqwest client: one method per API endpoint the MCP tools expose,
//! no caching and no retries.

mod client;
mod error;
pub mod models;


pub use client::HackMdClient;
pub use error::{HackMdError, HackMdResult};
pub use models::{CommentPermissionType, CreateNoteOptions, NotePermissionRole, UpdateNoteOptions};
