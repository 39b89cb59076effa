use tracing::debug;

use crate::errors::AppError;
use crate::models::{demo_record, ProfileRecord, DEMO_PORTFOLIO_ID};
use crate::store::PortfolioStore;

/// Where the rendered record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Stored,
    DemoFallback,
}

impl RecordSource {
    /// Value of the `x-portfolio-source` response header.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordSource::Stored => "stored",
            RecordSource::DemoFallback => "demo",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedPortfolio {
    pub id: String,
    pub record: ProfileRecord,
    pub source: RecordSource,
}

/// Loads the record for a page. A missing id yields the demo record unless
/// `strict` is set. The demo id is served even when nothing is stored under it.
pub async fn load_portfolio(
    store: &dyn PortfolioStore,
    id: &str,
    strict: bool,
) -> Result<LoadedPortfolio, AppError> {
    if let Some(record) = store.get(id).await? {
        return Ok(LoadedPortfolio {
            id: id.to_string(),
            record,
            source: RecordSource::Stored,
        });
    }

    if strict && id != DEMO_PORTFOLIO_ID {
        return Err(AppError::NotFound(format!("Portfolio '{id}' not found")));
    }

    debug!("No portfolio stored under '{id}', rendering demo record");
    Ok(LoadedPortfolio {
        id: id.to_string(),
        record: demo_record(),
        source: RecordSource::DemoFallback,
    })
}

/// Strict lookup for the JSON API.
pub async fn fetch_stored(store: &dyn PortfolioStore, id: &str) -> Result<ProfileRecord, AppError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio '{id}' not found")))
}
