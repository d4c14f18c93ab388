// src/docs/store.rs
// =============================================================================
// Where the proxy reads Markdown files from.
//
// Two backends:
// - Local: a directory on disk (the `docs/` folder under the public assets)
// - Http: the `/docs/` tree of a static-asset origin, fetched with reqwest
//
// Both take an already validated RelativeDocPath and additionally check that
// the resolved location is still inside their documents root: the local
// store canonicalizes (which follows symlinks), the HTTP store compares the
// joined URL against its base.
//
// Rust concepts:
// - Enum dispatch: A closed set of backends without trait objects
// - tokio::fs: Async filesystem access that doesn't block the runtime
// =============================================================================

use reqwest::Client;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use super::path::RelativeDocPath;

/// Failure to produce a document from a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resolved path '{0}' is outside the documents root")]
    Escapes(String),
    #[error("file not found: {path} (status {status})")]
    NotFound { status: u16, path: String },
    #[error("{0}")]
    Upstream(String),
}

/// A document read from a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDoc {
    pub content: String,
    /// Fully composed URL the content came from (`/docs/...` for local files)
    pub location: String,
}

#[derive(Debug, Clone)]
pub enum DocStore {
    Local(LocalDocs),
    Http(HttpDocs),
}

impl DocStore {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        DocStore::Local(LocalDocs { root: root.into() })
    }

    /// Store backed by `<origin>/docs/`
    pub fn http(client: Client, origin: &Url) -> Result<Self, url::ParseError> {
        Ok(DocStore::Http(HttpDocs::new(client, origin)?))
    }

    /// Human-readable description of the documents root, for logs
    pub fn root(&self) -> String {
        match self {
            DocStore::Local(local) => local.root.display().to_string(),
            DocStore::Http(http) => http.base.to_string(),
        }
    }

    pub async fn read(&self, path: &RelativeDocPath) -> Result<StoredDoc, StoreError> {
        match self {
            DocStore::Local(local) => local.read(path).await,
            DocStore::Http(http) => http.read(path).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalDocs {
    root: PathBuf,
}

impl LocalDocs {
    fn compose(&self, path: &RelativeDocPath) -> PathBuf {
        path.segments()
            .fold(self.root.clone(), |composed, segment| composed.join(segment))
    }

    async fn read(&self, path: &RelativeDocPath) -> Result<StoredDoc, StoreError> {
        let composed = self.compose(path);
        // Clients see the URL the file is served under, never the disk layout
        let location = format!("/docs/{}", path.as_str());
        tracing::info!("Loading markdown from: {}", composed.display());

        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|e| StoreError::Upstream(format!("documents root unavailable: {}", e)))?;

        let resolved = tokio::fs::canonicalize(&composed)
            .await
            .map_err(|e| io_error(e, &location))?;

        if !resolved.starts_with(&root) {
            tracing::warn!("Rejected {} (resolves to {})", composed.display(), resolved.display());
            return Err(StoreError::Escapes(resolved.display().to_string()));
        }

        if !is_file(&resolved).await {
            return Err(StoreError::NotFound {
                status: 404,
                path: location,
            });
        }

        let content = tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|e| io_error(e, &location))?;

        Ok(StoredDoc { content, location })
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

fn io_error(error: std::io::Error, location: &str) -> StoreError {
    match error.kind() {
        ErrorKind::NotFound => StoreError::NotFound {
            status: 404,
            path: location.to_string(),
        },
        _ => StoreError::Upstream(error.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct HttpDocs {
    client: Client,
    base: Url,
}

impl HttpDocs {
    fn new(client: Client, origin: &Url) -> Result<Self, url::ParseError> {
        // Url::join replaces the last segment unless the path ends in '/'
        let mut origin = origin.clone();
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }
        let base = origin.join("docs/")?;
        Ok(Self { client, base })
    }

    async fn read(&self, path: &RelativeDocPath) -> Result<StoredDoc, StoreError> {
        let url = self
            .base
            .join(path.as_str())
            .map_err(|e| StoreError::Upstream(e.to_string()))?;
        let location = url.to_string();

        if !location.starts_with(self.base.as_str()) {
            return Err(StoreError::Escapes(location));
        }

        tracing::info!("Loading markdown from: {}", location);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Failed to load file: {}, status: {}", location, status.as_u16());
            return Err(StoreError::NotFound {
                status: status.as_u16(),
                path: location,
            });
        }

        let content = response
            .text()
            .await
            .map_err(|e| StoreError::Upstream(e.to_string()))?;

        Ok(StoredDoc { content, location })
    }
}
