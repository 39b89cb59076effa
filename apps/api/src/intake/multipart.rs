//! Multipart form reading shared by the resume and photo uploads.

use std::collections::HashMap;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// A single file taken from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// Declared MIME type, as sent by the client.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// The first file of a multipart body plus its plain text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Reads the whole multipart body. Only the first part carrying a filename is
/// kept; later files are dropped without being buffered.
pub async fn read_upload_form(
    mut multipart: Multipart,
    body_limit: usize,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, body_limit))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) if form.file.is_none() => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, body_limit))?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some(file_name) => {
                debug!("Ignoring additional file '{file_name}' in field '{name}'");
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, body_limit))?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

fn multipart_error(e: MultipartError, body_limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge { limit: body_limit };
    }
    AppError::Validation(format!("Malformed upload: {}", e.body_text()))
}
