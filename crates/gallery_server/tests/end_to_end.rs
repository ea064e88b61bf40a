//! Drives the full pipeline: submitted text through the HTTP surface, the
//! embedded payload out of the rendered page, and the client runtime over it.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use gallery_client::{
    GalleryDom, GalleryRuntime, HeadlessDom, MemoryOrderStore, OrderStore, BATCH_LATENCY,
    SCROLL_DEBOUNCE,
};
use gallery_core::LoadPhase;
use gallery_engine::{decode_script_payload, ExtractSettings, SplitPolicy};
use gallery_server::{build_router, ServerConfig};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use tower::ServiceExt;

fn urls(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://img.example.com/{i}.jpg"))
        .collect()
}

async fn submit(raw: &str, limit: usize) -> String {
    let config = ServerConfig {
        extract: ExtractSettings {
            limit,
            split: SplitPolicy::Whitespace,
        },
        ..ServerConfig::default()
    };
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("urls", raw)
        .finish();
    let response = build_router(config)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(encoded))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn embedded_source(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script#gallery-data").unwrap();
    let payload = document.select(&selector).next().expect("payload element");
    decode_script_payload(&payload.inner_html()).expect("payload decodes")
}

#[tokio::test]
async fn submitted_page_drives_the_incremental_loader() {
    let source = urls(120);
    let html = submit(&source.join("\n"), 500).await;

    // The static render carries one figure per extracted URL.
    let document = Html::parse_document(&html);
    let figures = Selector::parse("figure.gallery-item").unwrap();
    assert_eq!(document.select(&figures).count(), 120);
    drop(document);

    let embedded = embedded_source(&html);
    assert_eq!(embedded, source);

    // The client loader realizes the same list in 50-entry batches.
    let mut rt = GalleryRuntime::new(embedded, 50, HeadlessDom::new(), MemoryOrderStore::new());
    let t0 = Instant::now();
    rt.boot(t0);
    rt.tick(t0 + BATCH_LATENCY);
    assert_eq!(rt.dom().images().len(), 50);

    let t1 = t0 + Duration::from_secs(1);
    rt.on_scroll(t1, 200.0);
    rt.tick(t1 + SCROLL_DEBOUNCE);
    rt.tick(t1 + SCROLL_DEBOUNCE + BATCH_LATENCY);
    assert_eq!(rt.dom().images().len(), 100);

    let t2 = t1 + Duration::from_secs(1);
    rt.on_scroll(t2, 200.0);
    rt.tick(t2 + SCROLL_DEBOUNCE);
    rt.tick(t2 + SCROLL_DEBOUNCE + BATCH_LATENCY);
    assert_eq!(rt.dom().images().len(), 120);
    assert_eq!(rt.state().phase(), LoadPhase::Done);
    assert_eq!(rt.dom().images()[119].url, source[119]);
}

#[tokio::test]
async fn reorder_in_one_session_survives_into_the_next() {
    let source = urls(4);
    let html = submit(&source.join(" "), 50).await;
    let embedded = embedded_source(&html);

    let mut rt = GalleryRuntime::new(
        embedded.clone(),
        50,
        HeadlessDom::new(),
        MemoryOrderStore::new(),
    );
    let t0 = Instant::now();
    rt.boot(t0);
    rt.tick(t0 + BATCH_LATENCY);
    rt.dom_mut().drag(3, 0);
    rt.on_drag_end(t0 + Duration::from_secs(1));

    let store = rt.store().clone();
    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted[0], source[3]);

    // Next page load over the same store restores the arrangement.
    let mut next = GalleryRuntime::new(embedded, 50, HeadlessDom::new(), store);
    next.boot(Instant::now());
    assert_eq!(next.dom().scan_order(), persisted);
    assert_eq!(next.state().phase(), LoadPhase::Done);
}

#[tokio::test]
async fn extraction_limit_flows_through_to_the_embedded_payload() {
    let html = submit(&urls(80).join("\n"), 50).await;
    let embedded = embedded_source(&html);
    assert_eq!(embedded.len(), 50);
    assert_eq!(embedded, urls(50));
}
