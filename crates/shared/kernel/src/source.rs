//! The only network boundary of the widget: plain `GET`s against the flag host.

use crate::error::{SourceError, SourceErrorExt};
use flagdeck_domain::config::FlagHostConfig;
use flagdeck_domain::directory::CodeDirectory;
use reqwest::{Client, Response};
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, trace};

/// Where flags come from.
///
/// Futures are not required to be `Send`: in the browser everything runs on the
/// single event-loop thread.
#[allow(async_fn_in_trait)]
pub trait FlagSource {
    /// Fetches the code directory (`<host>/<locale>/codes.json`).
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError>;

    /// Fetches `url` as UTF-8 text (vector images).
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;

    /// Fetches `url` as raw bytes (raster images).
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError>;
}

impl<S: FlagSource + ?Sized> FlagSource for &S {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        (**self).fetch_directory().await
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        (**self).fetch_text(url).await
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_bytes(url).await
    }
}

impl<S: FlagSource + ?Sized> FlagSource for Rc<S> {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        (**self).fetch_directory().await
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        (**self).fetch_text(url).await
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_bytes(url).await
    }
}

impl<S: FlagSource + ?Sized> FlagSource for Arc<S> {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        (**self).fetch_directory().await
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        (**self).fetch_text(url).await
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_bytes(url).await
    }
}

/// [`FlagSource`] backed by `reqwest` (browser `fetch` on `wasm32`, hyper elsewhere).
///
/// No timeout is applied: a hung request simply never resolves.
#[derive(Debug, Clone)]
pub struct HttpFlagSource {
    client: Client,
    host: FlagHostConfig,
}

impl HttpFlagSource {
    #[must_use]
    pub fn new(host: FlagHostConfig) -> Self {
        Self::with_client(Client::new(), host)
    }

    #[must_use]
    pub const fn with_client(client: Client, host: FlagHostConfig) -> Self {
        Self { client, host }
    }

    #[must_use]
    pub const fn host(&self) -> &FlagHostConfig {
        &self.host
    }

    async fn get(&self, url: &str) -> Result<Response, SourceError> {
        trace!(url, "GET");
        let response = self.client.get(url).send().await.context(format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
                context: None,
            });
        }

        Ok(response)
    }
}

impl FlagSource for HttpFlagSource {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        let url = self.host.directory_url();
        let body = self.get(&url).await?.bytes().await.context("Failed to read directory body")?;
        let directory: CodeDirectory =
            serde_json::from_slice(&body).context("Failed to parse code directory")?;

        debug!(entries = directory.len(), "Code directory fetched");
        Ok(directory)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        self.get(url).await?.text().await.context(format!("Failed to read text body of {url}"))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let bytes =
            self.get(url).await?.bytes().await.context(format!("Failed to read body of {url}"))?;
        Ok(bytes.to_vec())
    }
}
