// src/checker.rs
// =============================================================================
// Checks that every documented example's Markdown is reachable through the
// doc proxy.
//
// Key functionality:
// - Collects the doc path of every registry entry that has one
// - Fetches them all through the DocsClient, 16 at a time
// - Reports each one as ok / missing / error
//
// Rust concepts:
// - Streams: stream::iter + buffer_unordered for bounded concurrency
// - #[serde(flatten)]: The status fields sit inline in the JSON output
// =============================================================================

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::docs::{DocResult, DocsClient};
use crate::registry::{Category, Registry};

/// How many doc requests are in flight at once
const MAX_IN_FLIGHT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocStatus {
    /// Loaded, with its size in bytes
    Ok { bytes: usize },
    /// The proxy answered 404
    Missing { http_status: u16 },
    /// Transport failure or any other non-OK answer
    Error { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DocCheckResult {
    pub category: Category,
    pub id: String,
    pub doc_path: String,
    #[serde(flatten)]
    pub status: DocStatus,
}

impl DocCheckResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, DocStatus::Ok { .. })
    }
}

/// Fetches every registry doc through the proxy.
///
/// Results come back in registry order regardless of completion order.
pub async fn check_docs(registry: &Registry, client: &DocsClient) -> Vec<DocCheckResult> {
    let targets: Vec<(usize, Category, String, String)> = registry
        .all()
        .filter_map(|(category, entry)| {
            let doc_path = entry.doc_path.clone()?;
            Some((category, entry.id.clone(), doc_path))
        })
        .enumerate()
        .map(|(index, (category, id, doc_path))| (index, category, id, doc_path))
        .collect();

    tracing::info!("Checking {} documentation files", targets.len());

    let checks = targets.into_iter().map(|(index, category, id, doc_path)| {
        let client = client.clone();
        async move {
            let status = match client.fetch(&doc_path).await {
                DocResult::Success { content } => DocStatus::Ok {
                    bytes: content.len(),
                },
                DocResult::NotFound { status, .. } => DocStatus::Missing {
                    http_status: status,
                },
                DocResult::Error { message } => DocStatus::Error { message },
            };
            (
                index,
                DocCheckResult {
                    category,
                    id,
                    doc_path,
                    status,
                },
            )
        }
    });

    let mut results: Vec<(usize, DocCheckResult)> = stream::iter(checks)
        .buffer_unordered(MAX_IN_FLIGHT)
        .collect()
        .await;

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}
