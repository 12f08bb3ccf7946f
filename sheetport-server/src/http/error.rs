//! API error types with IntoResponse
//!
//! Upload failures are client errors (400) with a fixed message; storage
//! failures are logged and returned as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sheetport_core::SheetError;

use crate::models::MessageResponse;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing `file` field or malformed multipart body (400)
    UploadRead,

    /// Uploaded bytes are not a spreadsheet container (400)
    SpreadsheetOpen,

    /// Container opened but the worksheet could not be read (400)
    SpreadsheetParse,

    /// Storage failure (500, logged)
    Store(StoreError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UploadRead | Self::SpreadsheetOpen | Self::SpreadsheetParse => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client
    pub fn message(&self) -> &'static str {
        match self {
            Self::UploadRead => "failed to read uploaded file",
            Self::SpreadsheetOpen => "failed to open spreadsheet",
            Self::SpreadsheetParse => "failed to parse spreadsheet",
            Self::Store(_) | Self::Internal { .. } => "internal error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            _ => tracing::warn!(reason = self.message(), "rejected upload"),
        }

        let status = self.status();
        let body = Json(MessageResponse::new(status, self.message()));
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<SheetError> for ApiError {
    fn from(e: SheetError) -> Self {
        tracing::debug!("spreadsheet rejected: {}", e);
        match e {
            SheetError::Open { .. } => Self::SpreadsheetOpen,
            SheetError::Parse { .. } => Self::SpreadsheetParse,
        }
    }
}
