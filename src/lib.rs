//! MCP server exposing the HackMD REST API as tools.
//!
//! Runs over stdio for local clients or as a stateless Streamable HTTP
//! endpoint where every request may carry its own HackMD credentials.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod hackmd;
pub mod mcp;

#[cfg(test)]
pub(crate) mod test_utils;
