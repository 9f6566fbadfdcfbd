// SPDX-License-Identifier: MPL-2.0
//! Download of slide images referenced by URL.
//!
//! One [`ImageFetcher`] is built at startup and shared by every download, so
//! all slides go through the same connection pool.

use crate::error::{Error, Result};
use futures_util::StreamExt;
use std::future::Future;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Refuse bodies larger than this; a slide is never a 64 MB file.
pub const MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Shared HTTP client for remote slides.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl ImageFetcher {
    /// Builds the client with the default [`MAX_IMAGE_BYTES`] cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the HTTP client cannot be built (TLS
    /// backend initialisation).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedShowcase/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            max_bytes: MAX_IMAGE_BYTES,
        })
    }

    /// Replaces the body size cap.
    #[must_use]
    pub fn with_limit(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Fetches the raw bytes of an image. The returned future owns a handle
    /// to the shared client, so it can outlive `self`.
    ///
    /// # Errors
    ///
    /// The future resolves to [`Error::Fetch`] on connection failures,
    /// non-success statuses, and bodies that grow past the cap. The cap is
    /// checked against the advertised length and again as chunks arrive, so
    /// a chunked body without a length is cut off as soon as it overflows.
    pub fn fetch(&self, url: String) -> impl Future<Output = Result<Vec<u8>>> + Send + 'static {
        let client = self.client.clone();
        let max_bytes = self.max_bytes;
        async move { download(&client, &url, max_bytes).await }
    }
}

async fn download(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    check_status(response.status().as_u16())?;
    if let Some(length) = response.content_length() {
        check_length(length, max_bytes)?;
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Fetch(e.to_string()))?;
        check_length((body.len() + chunk.len()) as u64, max_bytes)?;
        body.extend_from_slice(&chunk);
    }

    tracing::debug!(%url, bytes = body.len(), "remote slide fetched");
    Ok(body)
}

fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Fetch(format!("HTTP status: {status}")))
    }
}

fn check_length(length: u64, max_bytes: u64) -> Result<()> {
    if length > max_bytes {
        Err(Error::Fetch(format!(
            "response too large ({length} bytes, limit {max_bytes})"
        )))
    } else {
        Ok(())
    }
}
