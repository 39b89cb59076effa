//! Profile extraction: a pluggable, trait-based step that turns an uploaded
//! resume into a `ProfileRecord`.
//!
//! Default: `SimulatedExtractor` (fixed pause, canned record, content ignored).
//! A real parser implements `ProfileExtractor` and is swapped in at startup;
//! storage and rendering do not change.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::intake::UploadedFile;
use crate::models::{canned_record, ProfileRecord};

/// Carried in `AppState` as `Arc<dyn ProfileExtractor>`.
#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> Result<ProfileRecord, AppError>;

    /// Label for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Stands in for real extraction: waits `delay`, then returns the canned record.
pub struct SimulatedExtractor {
    pub delay: Duration,
}

#[async_trait]
impl ProfileExtractor for SimulatedExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<ProfileRecord, AppError> {
        debug!(
            "Simulating extraction of '{}' ({} bytes) for {:?}",
            file.file_name,
            file.bytes.len(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(canned_record())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
