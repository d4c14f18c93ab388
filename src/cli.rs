// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is plain Rust structs and enums
// with #[...] attributes. Server flags also read environment variables
// (the `env` feature), so the same binary works under a process manager that
// only sets PORT, HOST and friends.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the types
// - Option<T>: Optional arguments
// - impl blocks: Turn parsed flags into config structs
// =============================================================================

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use url::Url;

use animation_notebook::config::{ClientConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "animation-notebook",
    version = "0.1.0",
    about = "Documentation proxy and Markdown renderer for an animation examples gallery",
    long_about = "animation-notebook serves the gallery's Markdown documentation through a \
                  path-checked proxy endpoint, and renders docs pages and code blocks the way \
                  the gallery's docs panel shows them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the doc proxy, example API and static docs server
    ///
    /// Example: animation-notebook serve --port 8080
    Serve(ServeArgs),

    /// List the examples in the registry
    ///
    /// Example: animation-notebook list gsap
    List {
        /// Only list this category (threejs, gsap, framer-motion)
        category: Option<String>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render one example's docs page the way the gallery shows it
    ///
    /// Example: animation-notebook show gsap animation --origin http://localhost:3000
    Show {
        /// Category slug (threejs, gsap, framer-motion)
        category: String,

        /// Example id within the category (e.g. basic-setup)
        id: String,

        /// Origin the gallery is served from. Without it the page is
        /// prerendered with placeholder docs.
        #[arg(long)]
        origin: Option<Url>,

        /// Write the HTML page to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render a local Markdown file to HTML
    ///
    /// Example: animation-notebook render public/docs/gsap/scroll.md
    Render {
        file: PathBuf,

        /// Print plain text (front matter and formatting removed) instead
        #[arg(long)]
        plain: bool,
    },

    /// Print the copy text of a code block in a Markdown file
    ///
    /// Example: animation-notebook copy public/docs/threejs/basic-setup.md --block 2
    Copy {
        file: PathBuf,

        /// 1-based index of the code block
        #[arg(long, default_value = "1")]
        block: usize,
    },

    /// Fetch every registered doc through a running proxy and report
    ///
    /// Example: animation-notebook check-docs --origin http://localhost:3000
    CheckDocs {
        /// Origin of the running proxy
        #[arg(long)]
        origin: Url,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Static asset directory; docs are read from <public-dir>/docs
    #[arg(long, env = "PUBLIC_DIR", default_value = "./public")]
    pub public_dir: PathBuf,

    /// Read docs from <origin>/docs/ over HTTP instead of the local directory
    #[arg(long, env = "DOCS_UPSTREAM_ORIGIN")]
    pub upstream_origin: Option<Url>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            public_dir: args.public_dir,
            upstream_origin: args.upstream_origin,
        }
    }
}

impl Commands {
    /// Client-side configuration for the commands that talk to the proxy
    pub fn client_config(&self) -> ClientConfig {
        match self {
            Commands::Show { origin, .. } => ClientConfig {
                origin: origin.clone(),
            },
            Commands::CheckDocs { origin, .. } => ClientConfig {
                origin: Some(origin.clone()),
            },
            _ => ClientConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "animation-notebook",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--public-dir",
            "site",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                let config = ServerConfig::from(args);
                assert_eq!(config.port, 8080);
                assert_eq!(config.docs_root(), PathBuf::from("site/docs"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_show_without_origin_prerenders() {
        let cli = Cli::try_parse_from(["animation-notebook", "show", "gsap", "animation"]).unwrap();
        assert!(cli.command.client_config().origin.is_none());
    }

    #[test]
    fn test_check_docs_requires_valid_origin() {
        assert!(Cli::try_parse_from(["animation-notebook", "check-docs", "--origin", "not a url"]).is_err());
    }
}
