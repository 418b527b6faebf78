//! Tests for MCP server initialization and the tool registry

use std::collections::HashSet;

use rmcp::ServerHandler;
use rmcp::model::Tool;

use super::server::HackMdServer;
use crate::config::{DEFAULT_API_URL, HackMdConfig};
use crate::hackmd::HackMdClient;
use crate::test_utils::init_crypto;

const EXPECTED_TOOLS: [&str; 12] = [
    "get_user_info",
    "list_teams",
    "get_history",
    "list_user_notes",
    "get_note",
    "create_note",
    "update_note",
    "delete_note",
    "list_team_notes",
    "create_team_note",
    "update_team_note",
    "delete_team_note",
];

fn server() -> HackMdServer {
    init_crypto();
    let client = HackMdClient::new(&HackMdConfig {
        api_token: "token".to_string(),
        api_url: DEFAULT_API_URL.to_string(),
    })
    .unwrap();
    HackMdServer::new(client)
}

fn tool(name: &str) -> Tool {
    server()
        .router()
        .list_all()
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("tool {name} not registered"))
}

/// (read_only, destructive, idempotent, open_world)
fn hints(name: &str) -> (Option<bool>, Option<bool>, Option<bool>, Option<bool>) {
    let annotations = tool(name).annotations.expect("annotations");
    (
        annotations.read_only_hint,
        annotations.destructive_hint,
        annotations.idempotent_hint,
        annotations.open_world_hint,
    )
}

#[test]
fn test_server_info() {
    let info = server().get_info();

    assert!(
        info.capabilities.tools.is_some(),
        "Server should support tools"
    );
    assert!(
        info.instructions.is_some(),
        "Server should provide instructions"
    );
}

#[test]
fn test_registers_exactly_the_expected_tools() {
    let tools = server().router().list_all();
    let names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
    let unique: HashSet<&str> = names.iter().map(String::as_str).collect();

    assert_eq!(names.len(), EXPECTED_TOOLS.len());
    assert_eq!(unique.len(), names.len(), "tool names must be unique");
    for expected in EXPECTED_TOOLS {
        assert!(unique.contains(expected), "missing tool {expected}");
    }
}

#[test]
fn test_every_tool_has_description_and_title() {
    for t in server().router().list_all() {
        assert!(t.description.is_some(), "{} has no description", t.name);
        let annotations = t.annotations.expect("annotations");
        assert!(annotations.title.is_some(), "{} has no title", t.name);
        assert_eq!(annotations.open_world_hint, Some(true));
    }
}

#[test]
fn test_read_tools_are_read_only() {
    for name in [
        "get_user_info",
        "list_teams",
        "get_history",
        "list_user_notes",
        "get_note",
        "list_team_notes",
    ] {
        assert_eq!(hints(name).0, Some(true), "{name} should be read-only");
    }
}

#[test]
fn test_mutating_tool_hints() {
    for name in ["create_note", "create_team_note"] {
        assert_eq!(hints(name), (Some(false), Some(false), Some(false), Some(true)));
    }
    for name in ["update_note", "update_team_note"] {
        assert_eq!(hints(name), (Some(false), Some(true), Some(false), Some(true)));
    }
    for name in ["delete_note", "delete_team_note"] {
        assert_eq!(hints(name), (Some(false), Some(true), Some(true), Some(true)));
    }
}

#[test]
fn test_input_schemas_use_camel_case_names() {
    let get_note = tool("get_note");
    assert!(get_note.input_schema["properties"].get("noteId").is_some());

    let update_team_note = tool("update_team_note");
    let properties = &update_team_note.input_schema["properties"];
    assert!(properties.get("teamPath").is_some());
    assert!(properties.get("noteId").is_some());
    assert!(properties.get("payload").is_some());

    let create_note = tool("create_note");
    assert!(create_note.input_schema["properties"].get("payload").is_some());
}
