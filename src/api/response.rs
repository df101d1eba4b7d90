//! Response types for the Vacation Entitlement Engine API.
//!
//! This module defines the compact response bodies and the error response
//! structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::EntitlementTier;
use crate::config::PolicyMetadata;
use crate::error::EngineError;

/// Response body for `/balance/remaining`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemainingResponse {
    /// The employee the balance is for.
    pub employee_id: String,
    /// The evaluation date.
    pub as_of: NaiveDate,
    /// Days available in the current period.
    pub current_remaining: u32,
}

/// Response body for `/entitlements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementsResponse {
    /// The active policy.
    pub policy: PolicyMetadata,
    /// The schedule applied by the engine.
    pub tiers: Vec<EntitlementTier>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidEntitlementTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidDate { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    format!(
                        "Field '{}' must be a calendar date such as 2024-08-01",
                        field
                    ),
                ),
            },
            EngineError::InvalidLeaveRequest { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE_REQUEST",
                    message,
                    "The leave request data contains invalid information",
                ),
            },
            EngineError::InsufficientBalance { available, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    message,
                    format!("At most {} days can be requested", available),
                ),
            },
            EngineError::RequestNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "REQUEST_NOT_FOUND",
                    message,
                    "The request being edited is not part of the supplied history",
                ),
            },
            EngineError::DateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DATE_OUT_OF_RANGE",
                    message,
                    "The hire date is too close to the end of the supported calendar",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidDate {
            field: "start_date".to_string(),
            value: "nope".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DATE");
        assert!(response.error.details.unwrap().contains("start_date"));
    }

    #[test]
    fn test_insufficient_balance_maps_to_unprocessable() {
        let response: ApiErrorResponse = EngineError::InsufficientBalance {
            requested: 10,
            available: 4,
        }
        .into();

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "INSUFFICIENT_BALANCE");
        assert_eq!(
            response.error.details.as_deref(),
            Some("At most 4 days can be requested")
        );
    }

    #[test]
    fn test_request_not_found_maps_to_not_found() {
        let response: ApiErrorResponse = EngineError::RequestNotFound {
            request_id: "req_404".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.error.message.contains("req_404"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
