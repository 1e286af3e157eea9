//! JSON envelopes shared by the server and its clients.
//!
//! Successful responses are wrapped as `{ "success": true, "data": ... }` (or
//! `message` for operations without a payload); failures as
//! `{ "success": false, "error": { "code", "message", "details"? } }`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

/// Successful response carrying a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Successful response carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Build a failure envelope.
    pub fn new(code: impl Into<String>, message: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details,
            },
        }
    }
}

/// Error code, message, and optional field-level details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code (e.g. "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// One offending field in a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
    /// Name of the violated constraint (e.g. "max_length").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl From<&FieldError> for ErrorDetail {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            message: error.message.clone(),
            constraint: Some(error.constraint.as_str().to_string()),
        }
    }
}

impl From<&ValidationErrors> for Vec<ErrorDetail> {
    fn from(errors: &ValidationErrors) -> Self {
        errors.iter().map(ErrorDetail::from).collect()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "crate::types::iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Constraint;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn test_error_envelope_omits_empty_details() {
        let body = ErrorResponse::new("NOT_FOUND", "Item with id x not found", Vec::new());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["error"].get("details").is_none());
    }

    #[test]
    fn test_details_from_validation_errors() {
        let mut errors = ValidationErrors::default();
        errors.push("price", "Price must be a positive number", Constraint::Positive);

        let details: Vec<ErrorDetail> = (&errors).into();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "price");
        assert_eq!(details[0].constraint.as_deref(), Some("positive"));
    }
}
