use axum::extract::Multipart;
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{UploadedFile, DEFAULT_UPLOAD_NAME, UPLOAD_FIELD};

/// Pulls the `file` part out of a multipart body. Its contents are read
/// and dropped; only the name and size survive. Other parts are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_NAME)
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        debug!("Received upload {} ({} bytes), discarding contents", filename, bytes.len());

        return Ok(UploadedFile {
            filename,
            size_bytes: bytes.len(),
        });
    }

    Err(AppError::ValidationError(format!(
        "Missing multipart field '{}'",
        UPLOAD_FIELD
    )))
}
