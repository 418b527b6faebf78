//! Per-request credential and URL resolution for HTTP mode.
//!
//! Token and URL are resolved independently, first non-blank value wins:
//!
//! 1. `Hackmd-Api-Token` / `Hackmd-Api-Url` request headers
//! 2. the base64-encoded JSON `config` query parameter
//! 3. `HACKMD_API_TOKEN` / `HACKMD_API_URL` from the environment snapshot
//!
//! The URL additionally falls back to [`DEFAULT_API_URL`](super::DEFAULT_API_URL). A URL that came
//! from the request itself must be on the allow-list.

use axum::http::HeaderMap;
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use serde::Deserialize;

use super::{
    API_TOKEN_HEADER, API_URL_HEADER, ConfigError, ConfigResult, EnvConfig, HackMdConfig,
    non_blank,
};

/// Configuration fields a caller can supply with the request.
///
/// Also the shape of the decoded `config` query parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    pub hackmd_api_token: Option<String>,
    pub hackmd_api_url: Option<String>,
}

impl RequestConfig {
    /// Collect the dedicated token and URL headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            hackmd_api_token: header_value(headers, API_TOKEN_HEADER),
            hackmd_api_url: header_value(headers, API_URL_HEADER),
        }
    }

    /// Decode a base64-encoded JSON object.
    pub fn decode(encoded: &str) -> ConfigResult<Self> {
        let encoded = encoded.trim();
        let bytes = STANDARD
            .decode(encoded)
            .or_else(|_| URL_SAFE.decode(encoded))
            .or_else(|_| URL_SAFE_NO_PAD.decode(encoded))
            .map_err(|e| ConfigError::InvalidEncodedConfig {
                message: format!("not valid base64 ({e})"),
            })?;

        let config: RequestConfig =
            serde_json::from_slice(&bytes).map_err(|e| ConfigError::InvalidEncodedConfig {
                message: format!("not a valid JSON config object ({e})"),
            })?;

        Ok(Self {
            hackmd_api_token: non_blank(config.hackmd_api_token),
            hackmd_api_url: non_blank(config.hackmd_api_url),
        })
    }
}

/// Resolve the configuration for one HTTP request.
///
/// `encoded_query` is the raw value of the `config` query parameter, if any.
/// A blank parameter is ignored; a malformed one is an error even when the
/// headers already supply everything.
pub fn resolve_request_config(
    headers: &HeaderMap,
    encoded_query: Option<&str>,
    env: &EnvConfig,
) -> ConfigResult<HackMdConfig> {
    let from_headers = RequestConfig::from_headers(headers);
    let from_query = match encoded_query.filter(|q| !q.trim().is_empty()) {
        Some(encoded) => RequestConfig::decode(encoded)?,
        None => RequestConfig::default(),
    };

    let api_token = from_headers
        .hackmd_api_token
        .or(from_query.hackmd_api_token)
        .or_else(|| env.api_token.clone())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(ConfigError::MissingToken)?;

    let api_url = match from_headers.hackmd_api_url.or(from_query.hackmd_api_url) {
        Some(url) => {
            let url = url.trim().to_string();
            if !env.is_api_url_allowed(&url) {
                return Err(ConfigError::DisallowedApiUrl { url });
            }
            url
        }
        None => env.api_url_or_default(),
    };

    Ok(HackMdConfig { api_token, api_url })
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?;
    non_blank(Some(value.to_string()))
}
