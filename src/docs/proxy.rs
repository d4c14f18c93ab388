// src/docs/proxy.rs
// =============================================================================
// The doc proxy endpoint: GET /api/docs?file=<relative path>
//
// Validation order:
// 1. no `file` parameter            -> 400 "No file parameter provided"
// 2. `file` contains ".."           -> 400 "Invalid file path"
// 3. any other unsafe path shape    -> 400 "Invalid file path"
// 4. resolved outside the docs root -> 400 "Invalid file path"
//
// Outcomes once the path is accepted:
// - missing file / upstream non-OK  -> 404 with the document URL
// - transport or I/O failure        -> 500 "Failed to load file"
// - anything unexpected (panics too)-> 500 "Server error"
// - success                         -> 200 text/markdown, no-cache
//
// The handler keeps no state between requests; the store is shared read-only.
// =============================================================================

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;

use super::path::{self, PathError};
use super::store::{DocStore, StoreError};

#[derive(Debug, Deserialize)]
pub struct DocsQuery {
    file: Option<String>,
}

/// Everything the endpoint can answer with instead of a document.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("No file parameter provided")]
    MissingFile,
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("File not found: {path} (status {status})")]
    NotFound { status: u16, path: String },
    #[error("Failed to load file: {0}")]
    LoadFailed(String),
    #[error("Server error")]
    Unexpected,
}

impl From<PathError> for DocsError {
    fn from(error: PathError) -> Self {
        DocsError::InvalidPath(error.to_string())
    }
}

impl From<StoreError> for DocsError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Escapes(resolved) => DocsError::InvalidPath(resolved),
            StoreError::NotFound { status, path } => DocsError::NotFound { status, path },
            StoreError::Upstream(details) => DocsError::LoadFailed(details),
        }
    }
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            DocsError::MissingFile => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "No file parameter provided" }),
            ),
            DocsError::InvalidPath(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Invalid file path" }),
            ),
            DocsError::NotFound { status, path } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({
                    "error": "File not found",
                    "status": status,
                    "path": path,
                }),
            ),
            DocsError::LoadFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "Failed to load file",
                    "details": details,
                }),
            ),
            DocsError::Unexpected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// GET /api/docs
pub async fn get_doc(
    State(store): State<Arc<DocStore>>,
    Query(query): Query<DocsQuery>,
) -> Result<Response, DocsError> {
    let file = match query.file {
        Some(file) if !file.is_empty() => file,
        _ => return Err(DocsError::MissingFile),
    };

    let relative = path::validate(&file).map_err(|e| {
        tracing::warn!("Rejected doc request '{}': {}", file, e);
        DocsError::from(e)
    })?;

    let doc = store.read(&relative).await.map_err(|e| {
        if let StoreError::Upstream(details) = &e {
            tracing::error!("Error loading file {}: {}", relative, details);
        }
        DocsError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/markdown"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        doc.content,
    )
        .into_response())
}

/// Last-resort response for a handler that panicked
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("API error: {}", message);
    DocsError::Unexpected.into_response()
}
