//! Top-level error type returned by the server entry points.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::hackmd::HackMdError;

#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    HackMd(#[from] HackMdError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(hackmd_mcp::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(hackmd_mcp::transport))]
    Transport { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
