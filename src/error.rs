//! Error Formatting
//!
//! Every handler failure is an [`AppError`]. Rendering it logs the failure
//! and produces the `{ "error": <kind>, "message": <text> }` body with the
//! status the failure carries.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;

/// Message used for every failure that has no classification of its own
pub const GENERIC_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or mistyped request data
    #[error("{0}")]
    Validation(String),

    /// Body that could not be decoded as JSON at all
    #[error("{0}")]
    Syntax(String),

    /// Unknown product id or route
    #[error("{0}")]
    NotFound(String),

    /// Known path, but no handler for the request method
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Anything else; the detail is logged but never sent to the client
    #[error("internal error: {0}")]
    Internal(String),
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn invalid_product() -> Self {
        AppError::Validation("Invalid product data".to_string())
    }

    pub fn product_not_found() -> Self {
        AppError::NotFound("Product not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Syntax(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Name reported in the `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "ValidationError",
            AppError::Syntax(_) => "SyntaxError",
            AppError::NotFound(_) => "NotFoundError",
            AppError::MethodNotAllowed(_) => "MethodNotAllowedError",
            AppError::Internal(_) => "ServerError",
        }
    }

    /// Text reported in the `message` field
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) => GENERIC_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Syntax(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "Error: {}", self);
        } else {
            tracing::warn!(kind = self.kind(), status = status.as_u16(), "Error: {}", self);
        }

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the generic 500 response.
///
/// Plugged into `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}
