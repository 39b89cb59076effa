//! Axum route handlers for the Generation API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_portfolio, GeneratedPortfolio};
use crate::intake::{read_upload_form, validate_resume};
use crate::models::ProfileRecord;
use crate::render::Layout;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatePortfolioResponse {
    pub id: String,
    pub url: String,
    pub record: ProfileRecord,
}

/// Shared by the upload form and the API: validate, claim the intake slot, generate.
pub async fn accept_upload(
    state: &AppState,
    multipart: Multipart,
) -> Result<GeneratedPortfolio, AppError> {
    let form = read_upload_form(multipart, state.config.body_limit()).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("No file was uploaded".to_string()))?;
    validate_resume(&file, state.config.max_upload_bytes)?;

    let permit = state.intake.try_begin()?;
    let store = state.store.clone();
    let extractor = state.extractor.clone();
    let ids = state.ids.clone();

    // Detached from the request: a dropped connection does not cancel a
    // started generation. The permit is released when the task ends.
    let task = tokio::spawn(async move {
        let _permit = permit;
        generate_portfolio(store.as_ref(), extractor.as_ref(), &ids, &file).await
    });

    task.await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("generation task failed")))?
}

/// POST /api/v1/portfolios
///
/// Multipart upload of one PDF. Returns the new identifier and its page URL.
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreatePortfolioResponse>), AppError> {
    let generated = accept_upload(&state, multipart).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePortfolioResponse {
            url: Layout::Classic.path(&generated.id),
            id: generated.id,
            record: generated.record,
        }),
    ))
}
