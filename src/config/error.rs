//! Configuration error types.
//!
//! Every variant carries a JSON-RPC error code so the HTTP layer can report
//! it to the caller without losing the distinction between the failure kinds.

use miette::Diagnostic;
use thiserror::Error;

use super::API_TOKEN_HEADER;

/// JSON-RPC code used for rejected requests (server-defined range).
pub const JSONRPC_BAD_REQUEST: i64 = -32000;

/// JSON-RPC parse error code.
pub const JSONRPC_PARSE_ERROR: i64 = -32700;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Bad Request: Please provide a HackMD API token via header '{header}'.",
        header = API_TOKEN_HEADER
    )]
    #[diagnostic(code(hackmd_mcp::config::missing_token))]
    MissingToken,

    #[error("HACKMD_API_TOKEN is required")]
    #[diagnostic(
        code(hackmd_mcp::config::missing_env_token),
        help("Export HACKMD_API_TOKEN with a token from your HackMD settings page.")
    )]
    MissingEnvToken,

    #[error("Bad Request: Invalid 'config' query parameter: {message}")]
    #[diagnostic(code(hackmd_mcp::config::invalid_encoded_config))]
    InvalidEncodedConfig { message: String },

    #[error("Bad Request: HackMD API URL '{url}' is not allowed.")]
    #[diagnostic(
        code(hackmd_mcp::config::disallowed_api_url),
        help("Add the URL to ALLOWED_HACKMD_API_URLS to permit it.")
    )]
    DisallowedApiUrl { url: String },
}

impl ConfigError {
    /// JSON-RPC error code reported for this error.
    pub fn jsonrpc_code(&self) -> i64 {
        match self {
            ConfigError::InvalidEncodedConfig { .. } => JSONRPC_PARSE_ERROR,
            ConfigError::MissingToken
            | ConfigError::MissingEnvToken
            | ConfigError::DisallowedApiUrl { .. } => JSONRPC_BAD_REQUEST,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
