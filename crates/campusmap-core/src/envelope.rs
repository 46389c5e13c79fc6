//! The `{success, data | error}` body every API endpoint responds with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Response envelope.
///
/// Serializes as `{"success": true, "data": .., "message"?: ..}` or
/// `{"success": false, "error": {"kind": .., "message": ..}}`.
#[derive(Debug)]
pub enum Envelope<T> {
    Success {
        data: T,
        message: Option<String>,
    },
    Failure {
        status: StatusCode,
        kind: &'static str,
        message: String,
    },
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self::Success {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn failure(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            kind,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: &'a str,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data, message } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
                if let Some(message) = message {
                    map.serialize_entry("message", message)?;
                }
                map.end()
            }
            Self::Failure { kind, message, .. } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", &ErrorBody { kind, message })?;
                map.end()
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Success { .. } => StatusCode::OK,
            Self::Failure { status, .. } => *status,
        };
        (status, axum::Json(self)).into_response()
    }
}
