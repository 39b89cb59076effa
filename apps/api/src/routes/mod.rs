pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::intake::handlers as intake;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        // Intake
        .route("/", get(intake::handle_intake_page))
        .route("/upload", post(intake::handle_upload))
        // Portfolio pages
        .route("/portfolio/:id", get(portfolio::handle_classic_page))
        .route("/design1/:id", get(portfolio::handle_sidebar_page))
        .route("/design2/:id", get(portfolio::handle_showcase_page))
        .route("/portfolio/:id/photo", post(portfolio::handle_photo_form))
        .route("/portfolio/:id/export", get(portfolio::handle_export))
        // Portfolio API
        .route(
            "/api/v1/portfolios",
            post(generation::handle_create_portfolio),
        )
        .route(
            "/api/v1/portfolios/:id",
            get(portfolio::handle_get_portfolio).delete(portfolio::handle_delete_portfolio),
        )
        .route(
            "/api/v1/portfolios/:id/photo",
            put(portfolio::handle_put_photo),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::generation::extractor::SimulatedExtractor;
    use crate::models::{canned_record, ProfileRecord};
    use crate::store::{MemoryStore, PortfolioStore};

    const BOUNDARY: &str = "resumify-test-boundary";

    fn test_state(config: Config) -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let extractor = Arc::new(SimulatedExtractor {
            delay: Duration::ZERO,
        });
        (AppState::new(store.clone(), extractor, config), store)
    }

    fn file_part(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(bytes);
        part.extend_from_slice(b"\r\n");
        part
    }

    fn text_part(field: &str, value: &str) -> Vec<u8> {
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n")
            .into_bytes()
    }

    fn multipart_request(method: &str, uri: &str, parts: Vec<Vec<u8>>) -> Request<Body> {
        let mut body: Vec<u8> = parts.concat();
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn pdf_upload(uri: &str, file_name: &str) -> Request<Body> {
        multipart_request(
            "POST",
            uri,
            vec![file_part("resume", file_name, "application/pdf", b"%PDF-1.7 test")],
        )
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &Response) -> String {
        response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    fn source_header(response: &Response) -> &str {
        response.headers()["x-portfolio-source"].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_upload_redirects_to_new_portfolio() {
        let (state, store) = test_state(Config::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(pdf_upload("/upload", "john-doe.pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let target = location(&response);
        let suffix = target.strip_prefix("/portfolio/john-doe-").unwrap();
        assert!(!suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(store.len().await, 1);

        let id = target.trim_start_matches("/portfolio/");
        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Alex Johnson");

        let page = app.oneshot(get_request(&target)).await.unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        assert_eq!(source_header(&page), "stored");
        let html = body_text(page).await;
        assert!(html.contains("Alex Johnson"));
        assert!(!html.contains("demo content"));
    }

    #[tokio::test]
    async fn test_unknown_portfolio_renders_demo() {
        let (state, _) = test_state(Config::default());
        let response = build_router(state)
            .oneshot(get_request("/portfolio/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source_header(&response), "demo");
        let html = body_text(response).await;
        assert!(html.contains("Alex Johnson"));
        assert!(html.contains("demo content"));
    }

    #[tokio::test]
    async fn test_strict_mode_returns_not_found_page() {
        let config = Config {
            strict_not_found: true,
            ..Config::default()
        };
        let (state, _) = test_state(config);
        let response = build_router(state)
            .oneshot(get_request("/design2/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Oops! Something Went Wrong"));
    }

    #[tokio::test]
    async fn test_txt_upload_is_rejected_without_storing() {
        let (state, store) = test_state(Config::default());
        let request = multipart_request(
            "POST",
            "/upload",
            vec![file_part("resume", "notes.txt", "text/plain", b"hello")],
        );
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(store.len().await, 0);
        let html = body_text(response).await;
        assert!(html.contains("Try Again"));
        assert!(html.contains("notes.txt"));
    }

    #[tokio::test]
    async fn test_upload_without_file_is_bad_request() {
        let (state, store) = test_state(Config::default());
        let request = multipart_request("POST", "/api/v1/portfolios", vec![text_part("note", "hi")]);
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let config = Config {
            max_upload_bytes: 4,
            ..Config::default()
        };
        let (state, store) = test_state(config);
        let response = build_router(state)
            .oneshot(pdf_upload("/api/v1/portfolios", "cv.pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_busy_intake_rejects_second_generation() {
        let (state, store) = test_state(Config::default());
        let _in_flight = state.intake.try_begin().unwrap();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(pdf_upload("/api/v1/portfolios", "cv.pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["error"]["code"], "INTAKE_BUSY");
        assert_eq!(store.len().await, 0);

        let page = app.oneshot(get_request("/")).await.unwrap();
        assert!(body_text(page).await.contains("Creating Your Portfolio"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_intake_busy_while_generation_runs() {
        let store = Arc::new(MemoryStore::default());
        let extractor = Arc::new(SimulatedExtractor {
            delay: Duration::from_secs(3),
        });
        let state = AppState::new(store.clone(), extractor, Config::default());
        let gate = state.intake.clone();
        let app = build_router(state);

        let first = tokio::spawn(
            app.clone()
                .oneshot(pdf_upload("/api/v1/portfolios", "first.pdf")),
        );
        while !gate.is_busy() {
            tokio::task::yield_now().await;
        }

        let second = app
            .clone()
            .oneshot(pdf_upload("/api/v1/portfolios", "second.pdf"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        assert!(!gate.is_busy());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_completes_after_client_disconnects() {
        let store = Arc::new(MemoryStore::default());
        let extractor = Arc::new(SimulatedExtractor {
            delay: Duration::from_secs(3),
        });
        let state = AppState::new(store.clone(), extractor, Config::default());
        let gate = state.intake.clone();
        let app = build_router(state);

        let request = tokio::spawn(app.oneshot(pdf_upload("/upload", "john-doe.pdf")));
        while !gate.is_busy() {
            tokio::task::yield_now().await;
        }
        request.abort();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(store.len().await, 1);
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn test_api_create_get_delete() {
        let (state, _) = test_state(Config::default());
        let app = build_router(state);

        let created = app
            .clone()
            .oneshot(pdf_upload("/api/v1/portfolios", "Jane Smith CV.pdf"))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("jane-smith-cv-"));
        assert_eq!(created["url"], format!("/portfolio/{id}"));

        let uri = format!("/api/v1/portfolios/{id}");
        let fetched = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        let record: ProfileRecord = serde_json::from_value(body_json(fetched).await).unwrap();
        assert_eq!(record, canned_record());

        let delete = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .body(Body::empty())
            .unwrap();
        let deleted = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_photo_form_updates_only_photo_and_returns_to_section() {
        let (state, store) = test_state(Config::default());
        store.create("cv-1", &canned_record()).await.unwrap();

        let request = multipart_request(
            "POST",
            "/portfolio/cv-1/photo",
            vec![
                text_part("layout", "sidebar"),
                text_part("section", "skills"),
                file_part("photo", "me.png", "image/png", b"\x89PNG"),
            ],
        );
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/design1/cv-1?section=skills");

        let stored = store.get("cv-1").await.unwrap().unwrap();
        assert_eq!(stored.photo.as_deref(), Some("data:image/png;base64,iVBORw=="));
        assert_eq!(
            ProfileRecord {
                photo: None,
                ..stored
            },
            canned_record()
        );
    }

    #[tokio::test]
    async fn test_failed_photo_form_retries_from_originating_layout() {
        let (state, store) = test_state(Config::default());
        store.create("cv-1", &canned_record()).await.unwrap();

        let request = multipart_request(
            "POST",
            "/portfolio/cv-1/photo",
            vec![
                text_part("layout", "sidebar"),
                text_part("section", "skills"),
                file_part("photo", "notes.txt", "text/plain", b"hello"),
            ],
        );
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let html = body_text(response).await;
        assert!(html.contains("href=\"/design1/cv-1?section=skills&amp;photo=edit\">Try Again"));
    }

    #[tokio::test]
    async fn test_photo_api_rejects_unknown_id_and_non_images() {
        let (state, store) = test_state(Config::default());
        store.create("cv-1", &canned_record()).await.unwrap();
        let app = build_router(state);

        let unknown = multipart_request(
            "PUT",
            "/api/v1/portfolios/ghost/photo",
            vec![file_part("photo", "me.png", "image/png", b"\x89PNG")],
        );
        let response = app.clone().oneshot(unknown).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let pdf = multipart_request(
            "PUT",
            "/api/v1/portfolios/cv-1/photo",
            vec![file_part("photo", "cv.pdf", "application/pdf", b"%PDF")],
        );
        let response = app.oneshot(pdf).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(store.get("cv-1").await.unwrap().unwrap().photo, None);
    }

    #[tokio::test]
    async fn test_photo_modal_opens_from_query() {
        let (state, store) = test_state(Config::default());
        store.create("cv-1", &canned_record()).await.unwrap();

        let response = build_router(state)
            .oneshot(get_request("/design2/cv-1?photo=edit"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Update Profile Photo"));
        assert!(html.contains("action=\"/portfolio/cv-1/photo\""));
    }

    #[tokio::test]
    async fn test_sidebar_section_query() {
        let (state, _) = test_state(Config::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(get_request("/design1/demo-alex-johnson-123?section=education"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Bachelor of Science in Computer Science"));

        let response = app
            .oneshot(get_request("/design1/demo-alex-johnson-123?section=bogus"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("About Me"));
    }

    #[tokio::test]
    async fn test_export_downloads_record() {
        let (state, store) = test_state(Config::default());
        store.create("cv-1", &canned_record()).await.unwrap();

        let response = build_router(state)
            .oneshot(get_request("/portfolio/cv-1/export"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"cv-1.json\""
        );
        let record: ProfileRecord = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(record, canned_record());
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let (state, _) = test_state(Config::default());
        let response = build_router(state)
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["store"], "memory");
        assert_eq!(json["intakeBusy"], false);
    }
}
