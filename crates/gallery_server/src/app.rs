use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use gallery_engine::{extract_urls, render_page, RenderError};
use gallery_logging::{gallery_error, gallery_info};

use crate::config::ServerConfig;

/// `GET /` renders the bare form, `POST /` the gallery. Any other method on
/// `/` gets the method router's 405.
pub fn build_router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_urls))
        .with_state(Arc::new(config))
}

async fn show_form() -> Response {
    page_response(render_page(&[], ""))
}

async fn submit_urls(
    State(config): State<Arc<ServerConfig>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_form_urlencoded(&headers) {
        return (StatusCode::BAD_REQUEST, "Unsupported Content-Type").into_response();
    }

    // A missing `urls` field is the same as an empty submission.
    let raw = form_field(&body, "urls").unwrap_or_default();
    let report = extract_urls(&raw, &config.extract);
    gallery_info!(
        "POST / extracted {} urls ({} invalid tokens dropped) from {} body bytes",
        report.urls.len(),
        report.dropped,
        body.len()
    );
    page_response(render_page(&report.urls, &raw))
}

fn page_response(result: Result<String, RenderError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            gallery_error!("Render failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Render failed").into_response()
        }
    }
}

fn is_form_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/x-www-form-urlencoded"))
}

fn form_field(body: &[u8], name: &str) -> Option<String> {
    form_urlencoded::parse(body)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
