// src/lib.rs
// =============================================================================
// Library root. The binary (src/main.rs) and the integration tests under
// tests/ both build on these modules.
//
// - registry: which examples exist and what they show
// - docs: doc path validation, the proxy endpoint, fetcher and docs panel
// - render: Markdown -> styled HTML, code blocks, plain text
// - server: axum router wiring it together
// - checker: concurrent reachability check of every registered doc
// - config: server and client settings
// =============================================================================

pub mod checker;
pub mod config;
pub mod docs;
pub mod registry;
pub mod render;
pub mod server;
