//! Spreadsheet import endpoint

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::models::MessageResponse;
use crate::state::AppState;

/// Multipart field carrying the spreadsheet
pub const UPLOAD_FIELD: &str = "file";

/// Pull the bytes of the `file` field out of a multipart body.
///
/// Only a file part counts: the field must carry a non-empty filename.
/// Anything else, including a plain text field named `file`, is skipped.
/// The file is buffered in full.
async fn read_upload(multipart: Result<Multipart, MultipartRejection>) -> Result<Bytes, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("multipart rejected: {}", e);
        ApiError::UploadRead
    })?;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("malformed multipart body: {}", e);
        ApiError::UploadRead
    })? {
        let is_file = field.file_name().is_some_and(|name| !name.is_empty());
        if field.name() == Some(UPLOAD_FIELD) && is_file {
            return field.bytes().await.map_err(|e| {
                tracing::debug!("failed to read upload field: {}", e);
                ApiError::UploadRead
            });
        }
    }

    Err(ApiError::UploadRead)
}

/// POST /upload - import every data row of the active worksheet
async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let bytes = read_upload(multipart).await?;
    let size = bytes.len();

    let records = tokio::task::spawn_blocking(move || sheetport_core::import_records(&bytes))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("spreadsheet task failed: {e}"),
        })??;

    let written = state.store().insert_batch(&records).await?;
    tracing::info!(bytes = size, parsed = records.len(), written, "imported spreadsheet");

    Ok(Json(MessageResponse::ok("success")))
}

/// Upload routes. The body size limit is lifted for this route only.
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload).layer(DefaultBodyLimit::disable()))
}
