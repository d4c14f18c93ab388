// src/server.rs
// =============================================================================
// The HTTP side: the doc proxy, the static docs directory and a small
// read-only API over the example registry.
//
// Routes:
//   GET /health                        -> {"status":"healthy"}
//   GET /api/docs?file=...             -> Markdown via the doc store
//   GET /api/examples                  -> every category with its entries
//   GET /api/examples/:category/:id    -> one entry, or 404
//   GET /docs/...                      -> files under <public_dir>/docs
//
// Every handler only reads shared state, so the state is a couple of Arcs
// and no locks.
// =============================================================================

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::docs::{get_doc, panic_response, DocStore};
use crate::registry::{Category, Registry};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub store: Arc<DocStore>,
}

impl AppState {
    pub fn new(registry: Registry, store: DocStore) -> Self {
        Self {
            registry: Arc::new(registry),
            store: Arc::new(store),
        }
    }
}

// Lets the doc proxy handler ask for just the store
impl FromRef<AppState> for Arc<DocStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

pub fn create_router(state: AppState, docs_dir: impl AsRef<std::path::Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/docs", get(get_doc))
        .route("/api/examples", get(list_examples))
        .route("/api/examples/:category/:id", get(get_example))
        .nest_service("/docs", ServeDir::new(docs_dir.as_ref()))
        // Middleware (applied in reverse order); panics become a 500 JSON body
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process is stopped
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let store = config.doc_store()?;
    tracing::info!("Documents root: {}", store.root());

    let state = AppState::new(Registry::builtin(), store);
    let app = create_router(state, config.docs_root());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn list_examples(State(state): State<AppState>) -> Response {
    // Serialized here, while the listing still borrows the registry
    Json(state.registry.categories()).into_response()
}

async fn get_example(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Response {
    let found = category
        .parse::<Category>()
        .and_then(|parsed| state.registry.lookup(parsed, &id));

    match found {
        Ok(entry) => Json(entry.clone()).into_response(),
        Err(e) => {
            tracing::debug!("Example lookup failed: {}", e);
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": "Example not found",
                    "category": category,
                    "id": id,
                })),
            )
                .into_response()
        }
    }
}
