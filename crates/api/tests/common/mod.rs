//! Shared helpers for the API integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! production, backed by a stub slides service and a temporary assets
//! directory, so tests exercise routing, extraction, and error mapping
//! without any network traffic.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use deckforge_core::plan::{ShapeSpec, ShapeUpdate, SlideProperties, TextStyleSpec};
use deckforge_planner::AssetCatalog;
use deckforge_slides::service::{ResolvedEffect, SlidesApiError, SlidesService};

use deckforge_api::config::ServerConfig;
use deckforge_api::router::build_app_router;
use deckforge_api::state::AppState;

// ---------------------------------------------------------------------------
// Stub slides service
// ---------------------------------------------------------------------------

/// In-memory stand-in for the remote slides service.
///
/// Every call succeeds; shape indices are handed out from a counter so
/// the executor's handle threading still gets distinct values.
pub struct StubSlides {
    next_shape_index: AtomicU32,
}

impl StubSlides {
    pub fn new() -> Self {
        StubSlides {
            next_shape_index: AtomicU32::new(1),
        }
    }
}

#[async_trait::async_trait]
impl SlidesService for StubSlides {
    async fn object_exists(&self, _name: &str) -> Result<bool, SlidesApiError> {
        Ok(false)
    }

    async fn delete_file(&self, _name: &str) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn create_presentation(&self, _name: &str) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn set_slide_properties(
        &self,
        _name: &str,
        _properties: &SlideProperties,
    ) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn copy_master_slide(
        &self,
        _name: &str,
        _source_path: &str,
        _source_slide: u32,
        _apply_to_all: bool,
    ) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn create_slide(&self, _name: &str) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn create_shape(
        &self,
        _name: &str,
        _slide: u32,
        _spec: &ShapeSpec,
    ) -> Result<u32, SlidesApiError> {
        Ok(self.next_shape_index.fetch_add(1, Ordering::SeqCst))
    }

    async fn update_shape(
        &self,
        _name: &str,
        _slide: u32,
        _shape_index: u32,
        _update: &ShapeUpdate,
    ) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn update_text_portion(
        &self,
        _name: &str,
        _slide: u32,
        _shape_index: u32,
        _paragraph: u32,
        _portion: u32,
        _style: &TextStyleSpec,
    ) -> Result<(), SlidesApiError> {
        Ok(())
    }

    async fn set_animation(
        &self,
        _name: &str,
        _slide: u32,
        _effects: &[ResolvedEffect],
    ) -> Result<(), SlidesApiError> {
        Ok(())
    }

    fn download_url(&self, name: &str) -> String {
        format!("https://slides.test/download/{name}")
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and the given assets
/// directory.
pub fn test_config(assets_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        assets_dir: assets_dir.to_path_buf(),
        default_layout: Default::default(),
        theme: None,
    }
}

/// Populate `dir` with the four card icons the planner requires.
pub fn seed_assets(dir: &Path) {
    std::fs::create_dir_all(dir.join("icon")).unwrap();
    for i in 1..=4u8 {
        std::fs::write(dir.join(format!("icon/Icon{i}.ico")), [i]).unwrap();
    }
}

/// Build the full application router over a stub slides service.
///
/// Mirrors the construction in `main.rs` so tests run through the same
/// middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(assets_dir: &Path) -> Router {
    let config = test_config(assets_dir);
    let state = AppState {
        config: Arc::new(config.clone()),
        slides: Arc::new(StubSlides::new()),
        assets: Arc::new(AssetCatalog::new(assets_dir, None)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// One part of a multipart form submission.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// POST a multipart form to the router.
pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Assert the standard error shape: non-200 status and
/// `{ success: false, message }` body.
pub async fn assert_error_body(response: Response<Body>, expected_status: StatusCode) -> String {
    assert_eq!(response.status(), expected_status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    json["message"].as_str().expect("message field").to_string()
}
