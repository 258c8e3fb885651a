//! HTTP fetcher for the feed.
//!
//! Performs a single GET and reads the body incrementally so that a
//! cancellation request can interrupt the read. A cancelled read never
//! returns the bytes received so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{MountainError, Result};

/// Cooperative cancellation flag shared between the caller and a fetch.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Feed fetcher.
///
/// # Example
///
/// ```rust,no_run
/// use mountains::{AppConfig, CancelFlag, Fetcher};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AppConfig::default();
///     let fetcher = Fetcher::new(&config)?;
///     let body = fetcher.fetch(&config.url, &CancelFlag::new()).await?;
///     println!("{} bytes", body.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher. No request timeout is configured.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the whole body as text.
    ///
    /// The connection and body stream are released on every return path.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if `url` is not an absolute HTTP(S) URL
    /// - `RequestError` on connect or read failure
    /// - `HttpStatus` on a non-success response
    /// - `Cancelled` if `cancel` is raised before the body is complete
    pub async fn fetch(&self, url: &str, cancel: &CancelFlag) -> Result<String> {
        let url = parse_url(url)?;

        if cancel.is_cancelled() {
            return Err(MountainError::Cancelled);
        }

        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MountainError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut stream = response.bytes_stream();
        let mut body = BytesMut::new();

        while let Some(chunk) = stream.next().await {
            if cancel.is_cancelled() {
                warn!("Fetch of {} cancelled, discarding {} bytes", url, body.len());
                return Err(MountainError::Cancelled);
            }
            body.extend_from_slice(&chunk?);
        }

        if cancel.is_cancelled() {
            warn!("Fetch of {} cancelled, discarding {} bytes", url, body.len());
            return Err(MountainError::Cancelled);
        }

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| MountainError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(MountainError::InvalidUrl(format!(
            "{url}: unsupported scheme `{scheme}`"
        ))),
    }
}
