//! Common types shared across models.

use serde::{Deserialize, Serialize};

/// Auxiliary references attached to a record.
///
/// Nested under the `auxdata` key in the feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuxData {
    /// Link to the record's wiki page.
    pub wiki: String,

    /// Link to an image of the record.
    pub img: String,
}

impl AuxData {
    /// Create new auxiliary data.
    pub fn new<S1: Into<String>, S2: Into<String>>(wiki: S1, img: S2) -> Self {
        Self {
            wiki: wiki.into(),
            img: img.into(),
        }
    }

    /// Whether both links are empty.
    pub fn is_empty(&self) -> bool {
        self.wiki.is_empty() && self.img.is_empty()
    }
}
