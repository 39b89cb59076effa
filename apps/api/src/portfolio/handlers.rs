//! Axum route handlers for portfolio pages and the portfolio JSON API.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderName, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, PageError};
use crate::intake::{read_upload_form, UploadedFile};
use crate::models::ProfileRecord;
use crate::portfolio::loader::{fetch_stored, load_portfolio, LoadedPortfolio};
use crate::portfolio::photo::{encode_photo, replace_photo};
use crate::render::{render_portfolio, Layout, PhotoModal, PortfolioView, Section};
use crate::state::AppState;

pub const PORTFOLIO_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-portfolio-source");

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub section: Option<String>,
    pub photo: Option<String>,
}

fn page_response(loaded: &LoadedPortfolio, layout: Layout, query: &PageQuery) -> Response {
    let view = PortfolioView::new(&loaded.id, &loaded.record, loaded.source, layout)
        .with_section(Section::from_query(query.section.as_deref()))
        .with_photo_modal(PhotoModal::from_query(query.photo.as_deref()));

    (
        [(
            PORTFOLIO_SOURCE_HEADER,
            HeaderValue::from_static(loaded.source.as_str()),
        )],
        Html(render_portfolio(&view)),
    )
        .into_response()
}

async fn render_layout(
    state: &AppState,
    id: &str,
    layout: Layout,
    query: &PageQuery,
) -> Result<Response, PageError> {
    let loaded = load_portfolio(state.store.as_ref(), id, state.config.strict_not_found).await?;
    Ok(page_response(&loaded, layout, query))
}

/// GET /portfolio/:id
pub async fn handle_classic_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    render_layout(&state, &id, Layout::Classic, &query).await
}

/// GET /design1/:id
pub async fn handle_sidebar_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    render_layout(&state, &id, Layout::Sidebar, &query).await
}

/// GET /design2/:id
pub async fn handle_showcase_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    render_layout(&state, &id, Layout::Showcase, &query).await
}

/// Photo upload plus the page the modal was opened from.
struct PhotoForm {
    file: Option<UploadedFile>,
    layout: Layout,
    section: Section,
}

async fn read_photo_form(state: &AppState, multipart: Multipart) -> Result<PhotoForm, AppError> {
    let form = read_upload_form(multipart, state.config.body_limit()).await?;
    let layout = form
        .field("layout")
        .and_then(|v| v.parse().ok())
        .unwrap_or(Layout::Classic);
    let section = Section::from_query(form.field("section"));
    Ok(PhotoForm {
        file: form.file,
        layout,
        section,
    })
}

/// Encodes the uploaded photo and stores it on the record.
async fn apply_photo(
    state: &AppState,
    id: &str,
    file: Option<UploadedFile>,
) -> Result<ProfileRecord, AppError> {
    let file = file.ok_or_else(|| AppError::Validation("No photo was uploaded".to_string()))?;
    let data_uri = encode_photo(&file, state.config.max_photo_bytes)?;
    replace_photo(state.store.as_ref(), id, data_uri).await
}

/// POST /portfolio/:id/photo
///
/// Save action of the photo modal. Redirects (303) back to the layout and
/// section the modal was opened from; on failure "Try Again" reopens the modal there.
pub async fn handle_photo_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Redirect, PageError> {
    let form = read_photo_form(&state, multipart).await.map_err(|e| {
        PageError::with_retry(e, Layout::Classic.edit_photo_url(&id, Section::About))
    })?;

    apply_photo(&state, &id, form.file).await.map_err(|e| {
        PageError::with_retry(e, form.layout.edit_photo_url(&id, form.section))
    })?;

    Ok(Redirect::to(&form.layout.url(&id, form.section)))
}

/// Keeps export file names to a safe character set.
fn export_file_name(id: &str) -> String {
    let stem: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    if stem.is_empty() {
        "portfolio.json".to_string()
    } else {
        format!("{stem}.json")
    }
}

/// GET /portfolio/:id/export
///
/// Downloads the record as JSON ("Download CV").
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let loaded = load_portfolio(state.store.as_ref(), &id, state.config.strict_not_found).await?;
    let body = serde_json::to_vec_pretty(&loaded.record)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("export serialization")))?;

    let disposition = format!("attachment; filename=\"{}\"", export_file_name(&id));
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (CONTENT_DISPOSITION, disposition),
            (
                PORTFOLIO_SOURCE_HEADER,
                HeaderValue::from_static(loaded.source.as_str()),
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileRecord>, AppError> {
    let record = fetch_stored(state.store.as_ref(), &id).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/portfolios/:id
pub async fn handle_delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete(&id).await? {
        info!("Deleted portfolio {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Portfolio '{id}' not found")))
    }
}

/// PUT /api/v1/portfolios/:id/photo
///
/// Multipart with a `photo` part. Returns the updated record.
pub async fn handle_put_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ProfileRecord>, AppError> {
    let form = read_photo_form(&state, multipart).await?;
    let record = apply_photo(&state, &id, form.file).await?;
    Ok(Json(record))
}
