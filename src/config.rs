// src/config.rs
// =============================================================================
// Runtime configuration, collected from CLI flags and environment variables.
//
// clap fills in the values (flag first, then env var, then default); these
// structs are what the rest of the program actually sees.
//
// - ServerConfig: where the proxy listens and where it reads documents from
// - ClientConfig: which origin the docs client talks to
// =============================================================================

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use url::Url;

use crate::docs::{DocStore, DocsClient};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Static asset directory; documents live in `<public_dir>/docs`
    pub public_dir: PathBuf,
    /// When set, the proxy reads documents from `<origin>/docs/` over HTTP
    /// instead of the local docs directory
    pub upstream_origin: Option<Url>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn docs_root(&self) -> PathBuf {
        self.public_dir.join("docs")
    }

    /// The document store the proxy reads from
    pub fn doc_store(&self) -> anyhow::Result<DocStore> {
        match &self.upstream_origin {
            Some(origin) => {
                let client = reqwest::Client::builder().build()?;
                Ok(DocStore::http(client, origin)?)
            }
            None => Ok(DocStore::local(self.docs_root())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Origin the gallery is served from; None means prerendering
    pub origin: Option<Url>,
}

impl ClientConfig {
    pub fn docs_client(&self) -> anyhow::Result<DocsClient> {
        match &self.origin {
            Some(origin) => Ok(DocsClient::new(origin.clone())?),
            None => Ok(DocsClient::prerender()),
        }
    }
}
