//! Data models for the mountain feed.
//!
//! This module contains the record decoded from each element of the
//! feed and its nested auxiliary data.

pub mod common;
pub mod mountain;

// Re-exports for convenience
pub use common::AuxData;
pub use mountain::Mountain;
