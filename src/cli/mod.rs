//! Command line entry point: flag parsing, logging and transport selection.


use std::net::IpAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::{EnvConfig, Transport, split_list};
use crate::error::AppResult;
use crate::mcp;

#[derive(Parser, Debug)]
#[command(name = "hackmd-mcp")]
#[command(author, version, about = "MCP server for the HackMD API", long_about = None)]
pub struct Cli {
    /// Transport to serve on: "stdio" or "http"
    #[arg(long, env = "TRANSPORT", default_value = "stdio")]
    pub transport: String,

    /// Host address to bind to (http transport)
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, env = "PORT", default_value_t = api::DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated allowed CORS origins; unset allows any origin
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl Cli {
    pub fn transport(&self) -> Transport {
        Transport::parse_lenient(&self.transport)
    }

    pub fn http_config(&self) -> api::Config {
        api::Config {
            host: self.host,
            port: self.port,
            cors_origins: self
                .cors_origin
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
        }
    }
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr; stdout carries the MCP stream in stdio mode.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hackmd_mcp=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}

fn install_crypto_provider() {
    // Fails only if another provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing();
    install_crypto_provider();
    run_with(cli, EnvConfig::from_env()).await
}

/// Dispatch to the selected transport.
pub async fn run_with(cli: Cli, env: EnvConfig) -> AppResult<()> {
    match cli.transport() {
        Transport::Http => {
            info!(host = %cli.host, port = cli.port, "Starting HTTP transport");
            api::run(cli.http_config(), env).await
        }
        Transport::Stdio => mcp::serve_stdio(&env).await,
    }
}
