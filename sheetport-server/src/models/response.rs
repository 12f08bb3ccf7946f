//! JSON envelopes shared by every endpoint
//!
//! Success and failure bodies both carry `code`, mirroring the HTTP status,
//! plus either `data` or `message`.

use axum::http::StatusCode;
use serde::Serialize;

/// `{ "code": 200, "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub code: u16,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data,
        }
    }
}

/// `{ "code": ..., "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub code: u16,
    pub message: String,
}

impl MessageResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }
}
