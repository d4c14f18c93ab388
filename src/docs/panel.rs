// src/docs/panel.rs
// =============================================================================
// The documentation panel for one example.
//
// Opening a panel shows the registry's explanation right away and, if the
// example has Markdown docs, schedules a load through the DocsClient after a
// short delay. Rapid open/close toggling therefore never hits the proxy, and
// a panel that is dropped before the delay elapses (or while the request is
// in flight) aborts its load task.
//
// Rust concepts:
// - tokio::spawn + JoinHandle: A background task we can await or abort
// - Drop: Cleanup that runs when the panel goes out of scope
// =============================================================================

use std::time::Duration;
use tokio::task::JoinHandle;

use super::fetch::DocsClient;
use crate::registry::{Category, ExampleEntry};

/// Delay between opening a panel and starting the doc request
pub const LOAD_DELAY: Duration = Duration::from_millis(100);

/// Shown while the load is pending
pub const LOADING_MESSAGE: &str = "Loading documentation...";

/// Notice recorded when the load task died and the explanation is shown instead
pub const FALLBACK_NOTICE: &str = "Failed to load documentation. Using fallback content instead.";

/// Docs panel state for one example.
///
/// Must be opened from within a Tokio runtime.
#[derive(Debug)]
pub struct DocPanel {
    title: String,
    explanation: String,
    content: String,
    notice: Option<&'static str>,
    pending: Option<JoinHandle<String>>,
}

impl DocPanel {
    pub fn open(category: Category, entry: &ExampleEntry, client: DocsClient) -> Self {
        let pending = entry.doc_path.clone().map(|doc_path| {
            tokio::spawn(async move {
                tokio::time::sleep(LOAD_DELAY).await;
                client.load_markdown(&doc_path).await
            })
        });

        Self {
            title: panel_title(category, &entry.id),
            explanation: entry.explanation.clone(),
            content: entry.explanation.clone(),
            notice: None,
            pending,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// What the panel shows right now
    pub fn displayed(&self) -> &str {
        if self.is_loading() {
            LOADING_MESSAGE
        } else {
            &self.content
        }
    }

    /// Set when the panel had to fall back to the explanation
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Aborts a pending load; the next `settle` falls back to the explanation
    pub fn cancel(&mut self) {
        if let Some(pending) = &self.pending {
            pending.abort();
        }
    }

    /// Waits for the pending load (if any) and returns the final content.
    pub async fn settle(&mut self) -> &str {
        if let Some(pending) = self.pending.as_mut() {
            let outcome = pending.await;
            self.pending = None;

            match outcome {
                Ok(markdown) => self.content = markdown,
                Err(e) => {
                    tracing::warn!("Documentation load for '{}' did not finish: {}", self.title, e);
                    self.notice = Some(FALLBACK_NOTICE);
                    self.content = if self.explanation.is_empty() {
                        "Documentation unavailable".to_string()
                    } else {
                        self.explanation.clone()
                    };
                }
            }
        }

        &self.content
    }
}

impl Drop for DocPanel {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// "Gsap Example: Text animation" style heading for a panel
pub fn panel_title(category: Category, id: &str) -> String {
    format!(
        "{} Example: {}",
        capitalize(category.slug()),
        capitalize(id).replace('-', " ")
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
