//! Axum route handlers for the intake page.

use axum::{
    extract::{Multipart, State},
    response::{Html, Redirect},
};
use tracing::info;

use crate::errors::PageError;
use crate::generation::handlers::accept_upload;
use crate::render::pages::render_intake_page;
use crate::render::Layout;
use crate::state::AppState;

/// GET /
pub async fn handle_intake_page(State(state): State<AppState>) -> Html<String> {
    Html(render_intake_page(
        state.intake.is_busy(),
        state.config.max_upload_bytes,
    ))
}

/// POST /upload
///
/// Form submission from the intake page. Success redirects (303) to the new
/// portfolio; any failure renders the Error state with a retry link home.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, PageError> {
    let generated = accept_upload(&state, multipart)
        .await
        .map_err(|e| PageError::with_retry(e, "/"))?;

    let location = Layout::Classic.path(&generated.id);
    info!("Upload complete, redirecting to {location}");
    Ok(Redirect::to(&location))
}
