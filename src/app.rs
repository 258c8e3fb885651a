//! Application facade.
//!
//! Wires the fetcher, the parser and the presenter together: one fetch on
//! a background task at start, parse and append back on the caller's task,
//! and purely local selection afterwards.

use tracing::{error, info, warn};

use crate::api::{CancelFlag, Fetcher};
use crate::config::AppConfig;
use crate::converters;
use crate::error::Result;
use crate::presenter::{Overlay, Presenter, View};

/// The single-screen mountain list.
///
/// # Example
///
/// ```rust,no_run
/// use mountains::{AppConfig, MountainApp, TerminalView};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut app = MountainApp::new(AppConfig::default(), TerminalView::stdout(true))?;
///     app.start().await;
///     app.select(0);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MountainApp<V: View> {
    config: AppConfig,
    fetcher: Fetcher,
    presenter: Presenter<V>,
    cancel: CancelFlag,
    started: bool,
}

impl<V: View> MountainApp<V> {
    /// Create the app with a fetcher built from `config`.
    pub fn new(config: AppConfig, view: V) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher, view))
    }

    /// Create the app with an existing fetcher.
    pub fn with_fetcher(config: AppConfig, fetcher: Fetcher, view: V) -> Self {
        Self {
            config,
            fetcher,
            presenter: Presenter::new(view),
            cancel: CancelFlag::new(),
            started: false,
        }
    }

    /// Fetch, parse and display the feed.
    ///
    /// Failures are logged and leave the list empty. Returns the number of
    /// records appended. Only the first call fetches.
    pub async fn start(&mut self) -> usize {
        match self.try_start().await {
            Ok(count) => count,
            Err(e) if e.is_network() => {
                error!("Failed to fetch {}: {}", self.config.url, e);
                0
            }
            Err(e) => {
                error!("Failed to parse response from {}: {}", self.config.url, e);
                0
            }
        }
    }

    /// Like [`start`](Self::start) but returns the failure instead of
    /// logging it.
    pub async fn try_start(&mut self) -> Result<usize> {
        if self.started {
            warn!("Feed already fetched, ignoring start");
            return Ok(0);
        }
        self.started = true;

        let fetcher = self.fetcher.clone();
        let url = self.config.url.clone();
        let cancel = self.cancel.clone();
        let task = tokio::spawn(async move { fetcher.fetch(&url, &cancel).await });

        let body = task.await??;
        let mountains = converters::parse_mountains(Some(body.as_str()))?;
        let count = mountains.len();

        self.presenter.append_all(mountains);
        info!("Loaded {} mountains from {}", count, self.config.url);
        Ok(count)
    }

    /// Handle for cancelling the fetch.
    pub fn cancel_handle(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Select a row. Out-of-range rows are ignored.
    pub fn select(&mut self, index: usize) -> Option<&Overlay> {
        self.presenter.on_select(index)
    }

    /// Dismiss the overlay.
    pub fn dismiss(&mut self) {
        self.presenter.dismiss();
    }

    pub fn presenter(&self) -> &Presenter<V> {
        &self.presenter
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}
