// tests/fetch_roundtrip.rs
// =============================================================================
// The docs client against a real server bound to 127.0.0.1:0.
//
// A small middleware counts requests to /api/docs so the panel tests can
// check whether a load actually reached the proxy. A second, broken proxy
// answers every request with a 500.
// =============================================================================

use animation_notebook::checker::{self, DocStatus};
use animation_notebook::docs::{DocPanel, DocResult, DocStore, DocsClient, LOAD_DELAY};
use animation_notebook::registry::{Category, Registry};
use animation_notebook::render;
use animation_notebook::server::{create_router, AppState};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

fn docs_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public").join("docs")
}

async fn count_doc_requests(
    State(hits): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == "/api/docs" {
        hits.fetch_add(1, Ordering::SeqCst);
    }
    next.run(request).await
}

async fn spawn_server() -> (Url, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = AppState::new(Registry::builtin(), DocStore::local(docs_root()));
    let app = create_router(state, docs_root())
        .layer(middleware::from_fn_with_state(hits.clone(), count_doc_requests));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Url::parse(&format!("http://{}", addr)).unwrap(), hits)
}

async fn failing_proxy() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Failed to load file" })),
    )
}

async fn spawn_failing_server() -> Url {
    let app = Router::new().route("/api/docs", get(failing_proxy));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}", addr)).unwrap()
}

#[tokio::test]
async fn test_load_markdown_returns_file_contents() {
    let (origin, _) = spawn_server().await;
    let client = DocsClient::new(origin).unwrap();

    let expected = std::fs::read_to_string(docs_root().join("gsap/scroll.md")).unwrap();
    assert_eq!(client.load_markdown("/docs/gsap/scroll.md").await, expected);
}

#[tokio::test]
async fn test_loading_twice_gives_the_same_result() {
    let (origin, hits) = spawn_server().await;
    let client = DocsClient::new(origin).unwrap();

    let first = client.load_markdown("/docs/threejs/camera-types.md").await;
    let second = client.load_markdown("/docs/threejs/camera-types.md").await;
    assert_eq!(first, second);
    // No caching: both calls went to the proxy
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_missing_doc_resolves_with_fallback() {
    let (origin, _) = spawn_server().await;
    let client = DocsClient::new(origin).unwrap();

    let result = client.fetch("/docs/gsap/missing.md").await;
    assert_eq!(
        result,
        DocResult::NotFound {
            status: 404,
            path: "/docs/gsap/missing.md".to_string()
        }
    );

    let markdown = client.load_markdown("/docs/gsap/missing.md").await;
    assert!(markdown.starts_with("# Documentation Unavailable"));
    assert!(markdown.contains("/docs/gsap/missing.md (Status: 404)"));
}

#[tokio::test]
async fn test_every_registered_doc_loads() {
    let (origin, _) = spawn_server().await;
    let client = DocsClient::new(origin).unwrap();

    let registry = Registry::builtin();
    let results = checker::check_docs(&registry, &client).await;
    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|r| r.is_ok()), "{:?}", results);
}

#[tokio::test]
async fn test_panel_loads_and_renders_docs() {
    let (origin, hits) = spawn_server().await;
    let registry = Registry::builtin();
    let entry = registry.lookup(Category::Gsap, "animation").unwrap();

    let mut panel = DocPanel::open(Category::Gsap, entry, DocsClient::new(origin).unwrap());
    assert_eq!(panel.title(), "Gsap Example: Animation");

    let markdown = panel.settle().await.to_string();
    assert!(markdown.starts_with("# GSAP Basic Animation"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let rendered = render::render(&markdown);
    assert_eq!(rendered.code_blocks.len(), 1);
    assert_eq!(rendered.code_blocks[0].label, "React JSX");
    assert!(rendered.code_blocks[0]
        .copy_text()
        .starts_with("import { useEffect, useRef } from 'react';"));
}

#[tokio::test]
async fn test_panel_dropped_before_delay_makes_no_request() {
    let (origin, hits) = spawn_server().await;
    let registry = Registry::builtin();
    let entry = registry.lookup(Category::ThreeJs, "basic-setup").unwrap();

    let panel = DocPanel::open(Category::ThreeJs, entry, DocsClient::new(origin).unwrap());
    drop(panel);

    tokio::time::sleep(LOAD_DELAY + Duration::from_millis(200)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_is_an_error_not_a_missing_doc() {
    let origin = spawn_failing_server().await;
    let client = DocsClient::new(origin).unwrap();

    let result = client.fetch("/docs/gsap/animation.md").await;
    assert_eq!(
        result,
        DocResult::Error {
            message: "Failed to load markdown file: /docs/gsap/animation.md (Status: 500)"
                .to_string()
        }
    );

    // The fallback text is the same shape as for a missing file
    let markdown = client.load_markdown("/docs/gsap/animation.md").await;
    assert!(markdown.starts_with("# Documentation Unavailable"));
    assert!(markdown.contains("/docs/gsap/animation.md (Status: 500)"));
}

#[tokio::test]
async fn test_check_docs_reports_outage_as_error() {
    let origin = spawn_failing_server().await;
    let client = DocsClient::new(origin).unwrap();

    let results = checker::check_docs(&Registry::builtin(), &client).await;
    assert_eq!(results.len(), 12);
    assert!(results
        .iter()
        .all(|r| matches!(r.status, DocStatus::Error { .. })));
}
