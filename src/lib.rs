//! # Mountains
//!
//! Fetch a JSON feed of mountains, validate it and present it as a list
//! with a dismissible detail overlay.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`MountainApp`] struct:
//!
//! ```rust,no_run
//! use mountains::{AppConfig, MountainApp, TerminalView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = MountainApp::new(AppConfig::default(), TerminalView::stdout(true))?;
//!
//!     // Fetch once in the background, then parse and display
//!     let count = app.start().await;
//!     println!("Loaded {} mountains", count);
//!
//!     // Show the summary of the first row
//!     if let Some(overlay) = app.select(0) {
//!         println!("{}", overlay.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - Failures are logged through `tracing` and leave the list empty
//! - Decoding is all-or-nothing: one bad element rejects the batch
//! - Cancelling a fetch discards whatever was already received
//!
//! ## Low-Level APIs
//!
//! - [`Fetcher`] - one-shot HTTP GET with cooperative cancellation
//! - [`converters`] - validating JSON decode
//! - [`Presenter`] - list ownership and selection, over any [`View`]

pub mod api;
mod app;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod presenter;
pub mod terminal;

// Main interface (recommended)
pub use app::MountainApp;

// Low-level APIs
pub use api::{CancelFlag, Fetcher};
pub use config::AppConfig;
pub use error::MountainError;
pub use models::{AuxData, Mountain};
pub use presenter::{Overlay, Presenter, View};
pub use terminal::TerminalView;
