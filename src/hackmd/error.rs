use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum HackMdError {
    #[error("Failed to connect to HackMD API: {source}")]
    #[diagnostic(
        code(hackmd_mcp::hackmd::connection_failed),
        help("Check HACKMD_API_URL and your network connection.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid HackMD API URL '{url}': {message}")]
    #[diagnostic(code(hackmd_mcp::hackmd::invalid_url))]
    InvalidUrl { url: String, message: String },

    #[error("Invalid response from HackMD API: {message}")]
    #[diagnostic(code(hackmd_mcp::hackmd::invalid_response))]
    InvalidResponse { message: String },

    #[error("HackMD API error ({status}): {message}")]
    #[diagnostic(code(hackmd_mcp::hackmd::api_error))]
    Api { status: u16, message: String },

    #[error("Failed to build HTTP client: {message}")]
    #[diagnostic(code(hackmd_mcp::hackmd::client))]
    Client { message: String },
}

impl HackMdError {
    /// HTTP status reported by the API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            HackMdError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HackMdError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            HackMdError::ConnectionFailed { source: e }
        } else {
            HackMdError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for HackMdError {
    fn from(e: serde_json::Error) -> Self {
        HackMdError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type HackMdResult<T> = Result<T, HackMdError>;
