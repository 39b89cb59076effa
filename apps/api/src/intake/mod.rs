//! Upload intake. Accepts one PDF resume and guards the single generation slot.
//!
//! Rejections happen here, before generation runs: nothing is stored for a
//! file that fails validation.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::warn;

use crate::errors::AppError;

pub mod handlers;
pub mod multipart;

pub use multipart::{read_upload_form, UploadedFile};

pub const PDF_MIME: &str = "application/pdf";
const GENERIC_MIME: &str = "application/octet-stream";

/// Checks that an upload is a non-empty PDF within the size limit.
///
/// The extension must be `.pdf`. A declared MIME type other than the generic
/// octet-stream must be `application/pdf`.
pub fn validate_resume(file: &UploadedFile, max_bytes: usize) -> Result<(), AppError> {
    if file.extension().as_deref() != Some("pdf") {
        warn!("Rejected upload '{}': not a .pdf file", file.file_name);
        return Err(AppError::UnsupportedFileType(format!(
            "'{}' is not a PDF. Please upload a .pdf resume.",
            file.file_name
        )));
    }

    if let Some(declared) = file.content_type.as_deref() {
        let essence = declared.split(';').next().unwrap_or_default().trim();
        if !essence.eq_ignore_ascii_case(PDF_MIME) && !essence.eq_ignore_ascii_case(GENERIC_MIME) {
            warn!(
                "Rejected upload '{}': declared type {declared}",
                file.file_name
            );
            return Err(AppError::UnsupportedFileType(format!(
                "'{}' was sent as {declared}, expected {PDF_MIME}",
                file.file_name
            )));
        }
    }

    if file.bytes.is_empty() {
        return Err(AppError::Validation(format!(
            "'{}' is empty",
            file.file_name
        )));
    }

    if file.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge { limit: max_bytes });
    }

    Ok(())
}

/// Single-slot gate: at most one generation in flight.
#[derive(Clone)]
pub struct IntakeGate {
    slot: Arc<Semaphore>,
}

/// Held for the duration of one generation. Dropping it reopens the intake.
pub struct IntakePermit {
    _permit: OwnedSemaphorePermit,
}

impl Default for IntakeGate {
    fn default() -> Self {
        Self {
            slot: Arc::new(Semaphore::new(1)),
        }
    }
}

impl IntakeGate {
    /// Claims the slot without waiting. A busy gate rejects; nothing is queued.
    pub fn try_begin(&self) -> Result<IntakePermit, AppError> {
        self.slot
            .clone()
            .try_acquire_owned()
            .map(|permit| IntakePermit { _permit: permit })
            .map_err(|_| AppError::IntakeBusy)
    }

    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }
}
