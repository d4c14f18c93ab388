// src/docs/mod.rs
// =============================================================================
// The documentation pipeline.
//
// Submodules:
// - path: logical path -> relative reference, and path validation
// - store: where the proxy reads files from (local dir or static origin)
// - proxy: the GET /api/docs handler and its error responses
// - fetch: the client that talks to the proxy and never fails outward
// - panel: debounced, cancellable loading for one example's docs panel
// =============================================================================

mod fetch;
mod panel;
mod path;
mod proxy;
mod store;

pub use fetch::{unavailable_document, DocResult, DocsClient, PLACEHOLDER};
pub use panel::{panel_title, DocPanel, FALLBACK_NOTICE, LOADING_MESSAGE, LOAD_DELAY};
pub use path::{relative_reference, validate, PathError, RelativeDocPath};
pub use proxy::{get_doc, panic_response, DocsError, DocsQuery};
pub use store::{DocStore, StoreError, StoredDoc};
