//! Network access for the mountain feed.
//!
//! - [`Fetcher`]: one-shot HTTP GET returning the body as text
//! - [`CancelFlag`]: cooperative cancellation checked by the read loop

pub mod fetcher;

pub use fetcher::{CancelFlag, Fetcher};
