//! # Response Envelope
//!
//! The uniform JSON wrapper every endpoint answers with:
//! `{status, message?, data?}`. `fail` marks client errors (400/404),
//! `error` marks server errors (500).

use serde::Serialize;
use serde_json::Value;

/// Envelope status field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

/// The response envelope.
///
/// `message` and `data` are omitted from the JSON when absent, matching
/// the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Success with data only
    pub fn success(data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Success with message only
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Success with message and data
    pub fn success_with(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Client failure (400/404)
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Server error (500)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}
