//! Portfolio generation. Orchestrates extraction, identifier allocation and
//! persistence for one accepted upload.
//!
//! Flow: extract → next_id → store.create (fresh suffix on collision) → return.
//! The caller holds the intake permit for the whole run.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::extractor::ProfileExtractor;
use crate::generation::ids::{IdGenerator, PortfolioId};
use crate::intake::UploadedFile;
use crate::models::ProfileRecord;
use crate::store::{PortfolioStore, StoreError};

/// Max identifier allocations before giving up on a collision streak.
const MAX_ID_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPortfolio {
    pub id: String,
    pub record: ProfileRecord,
}

/// Runs generation for an already validated upload and persists the result.
pub async fn generate_portfolio(
    store: &dyn PortfolioStore,
    extractor: &dyn ProfileExtractor,
    ids: &IdGenerator,
    file: &UploadedFile,
) -> Result<GeneratedPortfolio, AppError> {
    info!(
        "Generating portfolio from '{}' via {} extractor",
        file.file_name,
        extractor.name()
    );
    let record = extractor.extract(file).await?;

    let id = persist_new(store, ids, &file.file_name, &record).await?;
    info!("Stored portfolio {id} for '{}'", file.file_name);

    Ok(GeneratedPortfolio {
        id: id.into_string(),
        record,
    })
}

async fn persist_new(
    store: &dyn PortfolioStore,
    ids: &IdGenerator,
    file_name: &str,
    record: &ProfileRecord,
) -> Result<PortfolioId, AppError> {
    let mut attempt = 1;
    loop {
        let id = ids.next_id(file_name);
        match store.create(id.as_str(), record).await {
            Ok(()) => return Ok(id),
            Err(StoreError::AlreadyExists(key)) if attempt < MAX_ID_ATTEMPTS => {
                warn!(
                    "Identifier attempt {attempt}/{MAX_ID_ATTEMPTS}: {key} already taken, retrying"
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
