//! Error types for the person API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the append and lookup flows
//! address a person by id, and "no such person" is the common failure there.
//! Both HTTP variants keep the raw body so it can be shown to the user
//! verbatim. `Transport` covers requests that never produced a response.

use std::fmt;

/// Errors returned by `PersonClient` parse methods and by `Transport`s.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404.
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The request never completed (connection refused, DNS, reset, ...).
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl ApiError {
    /// Body text of an HTTP error response, if this error came from one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { body } | ApiError::HttpError { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { body } if body.is_empty() => write!(f, "resource not found"),
            ApiError::NotFound { body } => write!(f, "resource not found: {body}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
