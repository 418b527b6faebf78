//! Configuration resolution.
//!
//! The process environment is read once into an [`EnvConfig`] snapshot.
//! Stdio mode builds its [`HackMdConfig`] straight from that snapshot, while
//! HTTP mode layers per-request headers and the encoded `config` query
//! parameter on top of it (see [`resolver`]).

mod error;
pub mod resolver;


use std::env;
use std::fmt;

use tracing::warn;

pub use error::{ConfigError, ConfigResult, JSONRPC_BAD_REQUEST, JSONRPC_PARSE_ERROR};
pub use resolver::{RequestConfig, resolve_request_config};

/// Base URL used when neither the request nor the environment supplies one.
pub const DEFAULT_API_URL: &str = "https://api.hackmd.io/v1";

/// Request header carrying the API token in HTTP mode.
pub const API_TOKEN_HEADER: &str = "Hackmd-Api-Token";

/// Request header carrying the API base URL in HTTP mode.
pub const API_URL_HEADER: &str = "Hackmd-Api-Url";

pub const ENV_API_TOKEN: &str = "HACKMD_API_TOKEN";
pub const ENV_API_URL: &str = "HACKMD_API_URL";
pub const ENV_ALLOWED_API_URLS: &str = "ALLOWED_HACKMD_API_URLS";

/// Credentials and endpoint for one HackMD client.
#[derive(Clone, PartialEq, Eq)]
pub struct HackMdConfig {
    pub api_token: String,
    pub api_url: String,
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for HackMdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HackMdConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// MCP transport the binary serves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

impl Transport {
    /// Parse a `TRANSPORT` value. Unknown values fall back to stdio.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" => Transport::Http,
            "stdio" | "" => Transport::Stdio,
            other => {
                warn!("Unknown TRANSPORT \"{}\", defaulting to \"stdio\" mode.", other);
                Transport::Stdio
            }
        }
    }
}

/// Snapshot of the HackMD-related environment variables.
///
/// Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_token: Option<String>,
    pub api_url: Option<String>,
    pub allowed_api_urls: Vec<String>,
}

impl EnvConfig {
    /// Read the snapshot from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_token: non_blank(lookup(ENV_API_TOKEN)),
            api_url: non_blank(lookup(ENV_API_URL)),
            allowed_api_urls: lookup(ENV_ALLOWED_API_URLS)
                .map(|list| split_list(&list))
                .unwrap_or_default(),
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = non_blank(Some(token.into()));
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = non_blank(Some(url.into()));
        self
    }

    pub fn with_allowed_api_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_api_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Effective allow-list: the configured URLs, or only the default URL.
    pub fn effective_allowed_api_urls(&self) -> Vec<String> {
        if self.allowed_api_urls.is_empty() {
            vec![DEFAULT_API_URL.to_string()]
        } else {
            self.allowed_api_urls.clone()
        }
    }

    /// Check whether `url` is on the effective allow-list.
    pub fn is_api_url_allowed(&self, url: &str) -> bool {
        let wanted = normalize_url(url);
        self.effective_allowed_api_urls()
            .iter()
            .any(|allowed| normalize_url(allowed) == wanted)
    }

    /// URL from the environment, or the built-in default.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Configuration for stdio mode, where only the environment is consulted.
    pub fn stdio_config(&self) -> ConfigResult<HackMdConfig> {
        let api_token = self.api_token.clone().ok_or(ConfigError::MissingEnvToken)?;

        Ok(HackMdConfig {
            api_token,
            api_url: self.api_url_or_default(),
        })
    }
}

/// Split a comma-separated list, dropping blank entries.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}
