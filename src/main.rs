// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) and parse command-line arguments (clap)
// 2. Dispatch to the appropriate subcommand handler
// 3. Print results
// 4. Exit with proper code (0 = success, 1 = not found / missing docs, 2 = error)
//
// Rust concepts used:
// - async/await: The server and the docs client are async
// - Result<T, E>: For error handling (anyhow::Result in the binary)
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animation_notebook::checker::{self, DocCheckResult, DocStatus};
use animation_notebook::config::ServerConfig;
use animation_notebook::docs::DocPanel;
use animation_notebook::registry::{Category, Registry};
use animation_notebook::render::{self, Clipboard, CopyButton};
use animation_notebook::server;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "animation_notebook=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let client_config = cli.command.client_config();

    match cli.command {
        Commands::Serve(args) => {
            let config = ServerConfig::from(args);
            server::serve(&config).await?;
            Ok(0)
        }
        Commands::List { category, json } => handle_list(category.as_deref(), json),
        Commands::Show {
            category, id, out, ..
        } => {
            let client = client_config.docs_client()?;
            handle_show(&category, &id, client, out.as_deref()).await
        }
        Commands::Render { file, plain } => handle_render(&file, plain).await,
        Commands::Copy { file, block } => handle_copy(&file, block).await,
        Commands::CheckDocs { json, .. } => {
            let client = client_config.docs_client()?;
            handle_check_docs(client, json).await
        }
    }
}

// Handles the 'list' subcommand
fn handle_list(category: Option<&str>, json: bool) -> Result<i32> {
    let registry = Registry::builtin();
    let categories = match category {
        Some(slug) => vec![slug.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    if json {
        let listing: Vec<_> = registry
            .categories()
            .into_iter()
            .filter(|listing| categories.contains(&listing.category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(0);
    }

    for category in categories {
        println!("{} {}", category.icon(), category.display_name());
        for entry in registry.examples(category) {
            let docs = entry.doc_path.as_deref().unwrap_or("-");
            println!("   {:<28} {:<36} {}", entry.id, entry.title, docs);
        }
        println!();
    }
    Ok(0)
}

// Handles the 'show' subcommand: the example page flow
async fn handle_show(
    category: &str,
    id: &str,
    client: animation_notebook::docs::DocsClient,
    out: Option<&Path>,
) -> Result<i32> {
    let registry = Registry::builtin();
    let category: Category = category.parse()?;

    let entry = match registry.lookup(category, id) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("❌ Example not found: {}", e);
            return Ok(1);
        }
    };

    let mut panel = DocPanel::open(category, entry, client);
    if panel.is_loading() {
        eprintln!("📄 {}", panel.displayed());
    }
    let markdown = panel.settle().await.to_string();
    if let Some(notice) = panel.notice() {
        eprintln!("⚠️  {}", notice);
    }

    let mut rendered = render::render(&markdown);
    rendered.html = format!("{}\n{}", entry.scene.render(), rendered.html);
    let page = render::render_page(panel.title(), &rendered);

    match out {
        Some(path) => {
            tokio::fs::write(path, page)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("✅ Wrote {}", path.display());
        }
        None => println!("{}", page),
    }
    Ok(0)
}

// Handles the 'render' subcommand
async fn handle_render(file: &Path, plain: bool) -> Result<i32> {
    let markdown = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;

    if plain {
        println!("{}", render::to_plain_text(&markdown));
    } else {
        println!("{}", render::render(&markdown).html);
    }
    Ok(0)
}

/// Copy target for the CLI: the code goes to stdout
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}

// Handles the 'copy' subcommand
async fn handle_copy(file: &Path, block: usize) -> Result<i32> {
    let markdown = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let rendered = render::render(&markdown);

    let code_block = match block.checked_sub(1).and_then(|i| rendered.code_blocks.get(i)) {
        Some(code_block) => code_block,
        None => {
            eprintln!(
                "❌ No code block {} in {} ({} found)",
                block,
                file.display(),
                rendered.code_blocks.len()
            );
            return Ok(1);
        }
    };

    let mut button = CopyButton::default();
    let now = Instant::now();
    button.activate(code_block, &mut StdoutClipboard, now)?;
    eprintln!("✅ {} ({})", button.label(now), code_block.label);
    Ok(0)
}

// Handles the 'check-docs' subcommand
async fn handle_check_docs(client: animation_notebook::docs::DocsClient, json: bool) -> Result<i32> {
    if let Some(origin) = client.origin() {
        eprintln!("🔍 Checking documentation through {}", origin);
    }

    let registry = Registry::builtin();
    let results = checker::check_docs(&registry, &client).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    let missing = results.iter().filter(|r| !r.is_ok()).count();
    if missing > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Prints check results as a human-readable table in the terminal
fn print_table(results: &[DocCheckResult]) {
    println!("{:<44} {:<12} {:<30}", "DOC", "STATUS", "DETAILS");
    println!("{}", "=".repeat(86));

    for result in results {
        let (status, details) = match &result.status {
            DocStatus::Ok { bytes } => ("✅ OK".to_string(), format!("{} bytes", bytes)),
            DocStatus::Missing { http_status } => {
                ("❌ MISSING".to_string(), format!("HTTP {}", http_status))
            }
            DocStatus::Error { message } => ("⚠️  ERROR".to_string(), message.clone()),
        };
        println!("{:<44} {:<12} {:<30}", result.doc_path, status, details);
    }

    println!();

    let ok_count = results.iter().filter(|r| r.is_ok()).count();
    println!("📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Missing or failed: {}", results.len() - ok_count);
    println!("   📋 Total: {}", results.len());
}
