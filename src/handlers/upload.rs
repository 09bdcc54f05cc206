//! Multipart upload handler
//!
//! Accepts `nombre`, `edad`, and `file` parts and echoes the received
//! metadata back. Files above the 100 KiB ceiling are rejected with 413.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::error::ApiError;

/// Maximum accepted file size: 100 KiB
pub const MAX_FILE_SIZE_BYTES: usize = 100 * 1024;

/// Echo response for a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub nombre: String,
    pub edad: String,
    pub filename: String,
    pub content_type: String,
}

/// Check an uploaded file against the size ceiling
///
/// A file of exactly [`MAX_FILE_SIZE_BYTES`] is accepted; one byte more is
/// rejected with a message naming the limit and the actual size in KB to one
/// decimal place.
pub fn check_file_size(size_bytes: usize) -> Result<(), String> {
    if size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(format!(
            "El archivo es demasiado grande. Tamaño máximo: 100 KB. Tamaño actual: {:.1} KB",
            size_bytes as f64 / 1024.0
        ));
    }
    Ok(())
}

/// POST /upload/ - Receive a multipart form with an attached file
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    let mut nombre: Option<String> = None;
    let mut edad: Option<String> = None;
    let mut file_meta: Option<(String, String, usize)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "nombre" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid field 'nombre': {}", e)))?;
                nombre = Some(value);
            }
            "edad" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid field 'edad': {}", e)))?;
                edad = Some(value);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid field 'file': {}", e)))?;

                check_file_size(data.len()).map_err(ApiError::PayloadTooLarge)?;

                file_meta = Some((filename, content_type, data.len()));
            }
            // Unknown parts are ignored
            _ => {}
        }
    }

    let nombre = nombre
        .ok_or_else(|| ApiError::BadRequest("Missing required field 'nombre'".to_string()))?;
    let edad =
        edad.ok_or_else(|| ApiError::BadRequest("Missing required field 'edad'".to_string()))?;
    let (filename, content_type, size_bytes) = file_meta
        .ok_or_else(|| ApiError::BadRequest("Missing required field 'file'".to_string()))?;

    tracing::info!(
        filename = %filename,
        content_type = %content_type,
        size_bytes,
        "Upload accepted"
    );

    Ok(Json(UploadResponse {
        nombre,
        edad,
        filename,
        content_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_at_limit_is_accepted() {
        assert!(check_file_size(MAX_FILE_SIZE_BYTES).is_ok());
        assert_eq!(MAX_FILE_SIZE_BYTES, 102_400);
    }

    #[test]
    fn test_file_one_byte_over_limit_is_rejected() {
        let err = check_file_size(102_401).unwrap_err();
        assert!(err.contains("100 KB"));
        assert!(err.contains("100.0 KB"));
    }

    #[test]
    fn test_empty_file_is_accepted() {
        assert!(check_file_size(0).is_ok());
    }

    #[test]
    fn test_rejection_message_reports_actual_size() {
        // 150 KiB file
        let err = check_file_size(150 * 1024).unwrap_err();
        assert!(err.contains("150.0 KB"));

        // Fractional size rounds to one decimal place
        let err = check_file_size(102_451).unwrap_err();
        assert!(err.contains("100.0 KB"));

        let err = check_file_size(110_000).unwrap_err();
        assert!(err.contains("107.4 KB"));
    }
}
