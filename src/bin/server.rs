//! HackMD MCP server binary.
//!
//! Serves over stdio by default; `TRANSPORT=http` starts the HTTP endpoint.

#[tokio::main]
async fn main() -> miette::Result<()> {
    hackmd_mcp::cli::run().await?;
    Ok(())
}
