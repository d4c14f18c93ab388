// src/docs/fetch.rs
// =============================================================================
// The Markdown fetcher: logical doc path -> Markdown text.
//
// Strategy:
// - Reduce the logical path ("/docs/gsap/animation.md") to a relative
//   reference ("gsap/animation.md")
// - Ask the same-origin proxy for it: GET /api/docs?file=<reference>
// - Never cache; every call goes to the proxy
//
// The fetcher never fails outward. `fetch` reports what happened as a
// DocResult, and `load_markdown` collapses every failure into a small
// "Documentation Unavailable" Markdown document, so whatever renders the
// result never needs its own error branch.
//
// Rust concepts:
// - async functions: For network I/O
// - Enums as results: DocResult spells out every outcome
// - Cloning a Client: It's a handle to a shared connection pool
// =============================================================================

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use super::path::relative_reference;

/// Returned when there is no client origin to fetch from (e.g. prerendering)
pub const PLACEHOLDER: &str = "Loading content...";

/// Outcome of one documentation fetch. Never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DocResult {
    Success { content: String },
    NotFound { status: u16, path: String },
    Error { message: String },
}

impl DocResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DocResult::Success { .. })
    }

    /// Collapses the result into Markdown that can always be rendered
    pub fn into_markdown(self) -> String {
        match self {
            DocResult::Success { content } if !content.is_empty() => content,
            DocResult::Success { .. } => unavailable_document("Documentation file is empty"),
            DocResult::NotFound { status, path } => unavailable_document(&format!(
                "Failed to load markdown file: {} (Status: {})",
                path, status
            )),
            DocResult::Error { message } => unavailable_document(&message),
        }
    }
}

/// The Markdown shown in place of documentation that failed to load
pub fn unavailable_document(message: &str) -> String {
    format!(
        "# Documentation Unavailable\n\n\
         The markdown content could not be loaded. Please check the logs for details.\n\n\
         Error: {}",
        message
    )
}

/// Client for the documentation proxy.
///
/// Built with the origin the gallery is served from. Without one (the
/// prerender case) every load returns PLACEHOLDER and no request is made.
#[derive(Debug, Clone)]
pub struct DocsClient {
    http: Client,
    origin: Option<Url>,
}

impl DocsClient {
    pub fn new(origin: Url) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            origin: Some(origin),
        })
    }

    /// Client with no origin, for rendering outside a live client context
    pub fn prerender() -> Self {
        Self {
            http: Client::new(),
            origin: None,
        }
    }

    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    /// Proxy URL for a logical path, or None without an origin
    pub fn request_url(&self, logical_path: &str) -> Option<Result<Url, url::ParseError>> {
        let origin = self.origin.as_ref()?;
        Some(origin.join("/api/docs").map(|mut url| {
            url.query_pairs_mut()
                .append_pair("file", &relative_reference(logical_path));
            url
        }))
    }

    /// Fetches one document through the proxy and reports the outcome
    pub async fn fetch(&self, logical_path: &str) -> DocResult {
        tracing::info!("Starting to load markdown from: {}", logical_path);

        let url = match self.request_url(logical_path) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                return DocResult::Error {
                    message: format!("Invalid proxy URL: {}", e),
                }
            }
            None => {
                return DocResult::Error {
                    message: "No client origin to fetch documentation from".to_string(),
                }
            }
        };

        tracing::info!("Fetching from API: {}", url);

        let response = match self
            .http
            .get(url)
            .header(ACCEPT, "text/plain,text/markdown,*/*")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error loading markdown: {}", e);
                return DocResult::Error {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("API response error ({}): {}", status.as_u16(), body);
            if status == StatusCode::NOT_FOUND {
                return DocResult::NotFound {
                    status: status.as_u16(),
                    path: logical_path.to_string(),
                };
            }
            // Proxy or upstream failure, not a missing file
            return DocResult::Error {
                message: format!(
                    "Failed to load markdown file: {} (Status: {})",
                    logical_path,
                    status.as_u16()
                ),
            };
        }

        match response.text().await {
            Ok(content) => {
                tracing::info!("Successfully loaded markdown ({} bytes)", content.len());
                DocResult::Success { content }
            }
            Err(e) => {
                tracing::error!("Error reading markdown body: {}", e);
                DocResult::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Loads Markdown for a logical path. Always returns renderable Markdown.
    pub async fn load_markdown(&self, logical_path: &str) -> String {
        if self.origin.is_none() {
            tracing::debug!("No client origin, returning placeholder");
            return PLACEHOLDER.to_string();
        }

        self.fetch(logical_path).await.into_markdown()
    }
}
