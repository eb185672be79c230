//! HTTP error type and its JSON representation.
//!
//! Every failure is rendered as
//!
//! ```json
//! { "error": { "code": "no_period", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::engine::ValidationError;
use crate::utils::period_bounds::BoundsViolation;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed request body or DTO constraint failure.
    Validation { message: String, details: Value },
    /// Principal or rate could not be parsed.
    InvalidNumber { message: String, details: Value },
    /// No period component greater than zero.
    NoPeriod { message: String, details: Value },
    /// Period component above the configured maximum.
    OutOfRange { message: String, details: Value },
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, "validation_error", message.as_str(), details)
            }
            AppError::InvalidNumber { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_number", message.as_str(), details)
            }
            AppError::NoPeriod { message, details } => {
                (StatusCode::BAD_REQUEST, "no_period", message.as_str(), details)
            }
            AppError::OutOfRange { message, details } => {
                (StatusCode::BAD_REQUEST, "out_of_range", message.as_str(), details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message.as_str(), details)
            }
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidNumber(field) => AppError::InvalidNumber {
                message: err.to_string(),
                details: json!({ "field": field.as_str() }),
            },
            ValidationError::NoPeriod => AppError::NoPeriod {
                message: err.to_string(),
                details: json!({ "fields": ["years", "months", "days"] }),
            },
        }
    }
}

impl From<BoundsViolation> for AppError {
    fn from(err: BoundsViolation) -> Self {
        AppError::OutOfRange {
            message: err.to_string(),
            details: json!({
                "field": err.field(),
                "max": err.max(),
                "value": err.value(),
            }),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
