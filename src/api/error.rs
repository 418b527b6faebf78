//! JSON-RPC shaped error responses for the HTTP endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::{ConfigError, JSONRPC_BAD_REQUEST};

/// JSON-RPC internal error code.
pub const JSONRPC_INTERNAL_ERROR: i64 = -32603;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Method not allowed.")]
    #[diagnostic(code(hackmd_mcp::api::method_not_allowed))]
    MethodNotAllowed,

    #[error("Internal server error")]
    #[diagnostic(code(hackmd_mcp::api::internal))]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn jsonrpc_code(&self) -> i64 {
        match self {
            ApiError::Config(e) => e.jsonrpc_code(),
            ApiError::MethodNotAllowed => JSONRPC_BAD_REQUEST,
            ApiError::Internal => JSONRPC_INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = JsonRpcErrorResponse::new(self.jsonrpc_code(), self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

/// `{"jsonrpc":"2.0","error":{"code":..,"message":..},"id":null}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub error: JsonRpcError,
    pub id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcErrorResponse {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            error: JsonRpcError {
                code,
                message: message.into(),
            },
            id: None,
        }
    }
}
