use std::fmt;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::response;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Failure reported by one of the external providers (search or generation).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Which external collaborator an upstream failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Search,
    Generation,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Search => f.write_str("search"),
            Provider::Generation => f.write_str("generation"),
        }
    }
}

/// Outcome kinds of a failed insight request.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("missing required field(s): {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("no search results for '{query}'")]
    NoData { query: String },

    #[error("{provider} provider failed: {source}")]
    Upstream {
        provider: Provider,
        #[source]
        source: ProviderError,
    },
}

impl PipelineError {
    /// Message shown to the person who submitted the form.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Validation { .. } => {
                "Please fill in both the Product Name and Company URL fields.".to_string()
            }
            PipelineError::NoData { .. } => "Could not retrieve any information from the provided company URL. Please check the URL and try again.".to_string(),
            PipelineError::Upstream { source, .. } => {
                format!("An error occurred while generating insights: {}", source)
            }
        }
    }

    /// Validation and empty searches are the user's to fix; upstream failures are not.
    pub fn is_warning(&self) -> bool {
        !matches!(self, PipelineError::Upstream { .. })
    }

    /// Stable tag for API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation { .. } => "validation",
            PipelineError::NoData { .. } => "no_data",
            PipelineError::Upstream { .. } => "upstream",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Validation { .. } => StatusCode::BAD_REQUEST,
            PipelineError::NoData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        response::error::<()>(self.status_code(), self.kind(), self.user_message()).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid form submission: {0}")]
    FormError(#[from] MultipartError),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::FormError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) | AppError::TemplateError(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
