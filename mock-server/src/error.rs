use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON error document returned for every handled failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub rejected_value: serde_json::Value,
}

impl FieldError {
    pub fn new(field: &str, message: &str, rejected_value: impl Into<serde_json::Value>) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            rejected_value: rejected_value.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    body: ErrorResponse,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                status: status.as_u16(),
                error: status.canonical_reason().unwrap_or_default().to_string(),
                message: message.into(),
                field_errors: Vec::new(),
            },
        }
    }

    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        let mut err = Self::new(
            StatusCode::BAD_REQUEST,
            "Validation failed for one or more fields",
        );
        err.body.field_errors = field_errors;
        err
    }

    pub fn not_found(id: u64) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("Person with id {id} was not found."),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
