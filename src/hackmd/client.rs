use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{HackMdError, HackMdResult};
use super::models::{CreateNoteOptions, UpdateNoteOptions};
use crate::config::HackMdConfig;

/// Client for the HackMD REST API.
///
/// Every method issues exactly one request and hands the decoded JSON body
/// back untouched. Empty bodies (update/delete) decode to `Value::Null`.
#[derive(Clone)]
pub struct HackMdClient {
    base_url: Url,
    client: Client,
}

impl HackMdClient {
    /// Create a client authenticated with the configured bearer token.
    pub fn new(config: &HackMdConfig) -> HackMdResult<Self> {
        let raw_url = config.api_url.trim();
        let base_url = Url::parse(raw_url).map_err(|e| HackMdError::InvalidUrl {
            url: raw_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HackMdError::InvalidUrl {
                url: raw_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token.trim()))
            .map_err(|_| HackMdError::Client {
                message: "API token contains characters not allowed in a header".to_string(),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(concat!("hackmd-mcp/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| HackMdError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub async fn get_me(&self) -> HackMdResult<Value> {
        self.send(Method::GET, &["me"], None::<&()>).await
    }

    pub async fn get_teams(&self) -> HackMdResult<Value> {
        self.send(Method::GET, &["teams"], None::<&()>).await
    }

    pub async fn get_history(&self) -> HackMdResult<Value> {
        self.send(Method::GET, &["history"], None::<&()>).await
    }

    pub async fn get_note_list(&self) -> HackMdResult<Value> {
        self.send(Method::GET, &["notes"], None::<&()>).await
    }

    pub async fn get_note(&self, note_id: &str) -> HackMdResult<Value> {
        self.send(Method::GET, &["notes", note_id], None::<&()>).await
    }

    pub async fn create_note(&self, options: &CreateNoteOptions) -> HackMdResult<Value> {
        self.send(Method::POST, &["notes"], Some(options)).await
    }

    pub async fn update_note(
        &self,
        note_id: &str,
        options: &UpdateNoteOptions,
    ) -> HackMdResult<Value> {
        self.send(Method::PATCH, &["notes", note_id], Some(options)).await
    }

    pub async fn delete_note(&self, note_id: &str) -> HackMdResult<Value> {
        self.send(Method::DELETE, &["notes", note_id], None::<&()>).await
    }

    pub async fn get_team_notes(&self, team_path: &str) -> HackMdResult<Value> {
        self.send(Method::GET, &["teams", team_path, "notes"], None::<&()>).await
    }

    pub async fn create_team_note(
        &self,
        team_path: &str,
        options: &CreateNoteOptions,
    ) -> HackMdResult<Value> {
        self.send(Method::POST, &["teams", team_path, "notes"], Some(options)).await
    }

    pub async fn update_team_note(
        &self,
        team_path: &str,
        note_id: &str,
        options: &UpdateNoteOptions,
    ) -> HackMdResult<Value> {
        self.send(
            Method::PATCH,
            &["teams", team_path, "notes", note_id],
            Some(options),
        )
        .await
    }

    pub async fn delete_team_note(&self, team_path: &str, note_id: &str) -> HackMdResult<Value> {
        self.send(
            Method::DELETE,
            &["teams", team_path, "notes", note_id],
            None::<&()>,
        )
        .await
    }

    /// Build an endpoint URL below the base URL. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> HackMdResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HackMdError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> HackMdResult<Value> {
        let url = self.endpoint(segments)?;
        debug!(%method, path = url.path(), "HackMD API request");

        let mut request: RequestBuilder = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the JSON body on success (or `null` when empty),
    /// or a `HackMdError::Api` on non-success status codes.
    pub async fn handle_response(response: Response) -> HackMdResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let message = if text.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            text
        };
        Err(HackMdError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
