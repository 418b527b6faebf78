//! Model Context Protocol (MCP) server implementation
//!
//! - **server**: the `HackMdServer` handler and its assembled tool router
//! - **tools**: tool definitions grouped by HackMD API area
//! - **service**: stateless Streamable HTTP service, one per request
//! - **stdio**: long-lived stdio session

pub mod server;
mod service;
mod stdio;
pub mod tools;

#[cfg(test)]
mod server_test;

pub use server::HackMdServer;
pub use service::create_mcp_service;
pub use stdio::serve_stdio;
