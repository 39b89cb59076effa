//! Profile photo replacement.
//!
//! Photos are embedded in the record as `data:<mime>;base64,<payload>` URIs,
//! so a stored record stays self-contained in a single value.

use base64::Engine as _;
use tracing::info;

use crate::errors::AppError;
use crate::intake::UploadedFile;
use crate::models::ProfileRecord;
use crate::store::PortfolioStore;

/// Image type of an upload: the declared `image/*` type, else a guess from the
/// file name. Anything that is not an image is rejected.
fn image_mime(file: &UploadedFile) -> Result<String, AppError> {
    let declared = file
        .content_type
        .as_deref()
        .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .filter(|ct| ct.starts_with("image/"));
    if let Some(mime) = declared {
        return Ok(mime);
    }

    let guessed = mime_guess::from_path(&file.file_name).first();
    match guessed {
        Some(mime) if mime.type_() == mime_guess::mime::IMAGE => Ok(mime.essence_str().to_string()),
        _ => Err(AppError::UnsupportedFileType(format!(
            "'{}' is not an image",
            file.file_name
        ))),
    }
}

pub fn encode_photo(file: &UploadedFile, max_bytes: usize) -> Result<String, AppError> {
    let mime = image_mime(file)?;
    if file.bytes.is_empty() {
        return Err(AppError::Validation(format!("'{}' is empty", file.file_name)));
    }
    if file.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge { limit: max_bytes });
    }

    let payload = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    Ok(format!("data:{mime};base64,{payload}"))
}

/// Replaces the photo of a stored record and persists it. Only `photo` changes.
pub async fn replace_photo(
    store: &dyn PortfolioStore,
    id: &str,
    data_uri: String,
) -> Result<ProfileRecord, AppError> {
    let record = store.get(id).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Portfolio '{id}' not found. The demo portfolio cannot be edited."
        ))
    })?;

    let updated = record.with_photo(data_uri);
    store.put(id, &updated).await?;
    info!("Replaced photo of portfolio {id}");
    Ok(updated)
}
