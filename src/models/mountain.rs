//! The mountain record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::AuxData;

/// One decoded element of the feed.
///
/// Records are only built by [`crate::converters::parse_mountains`] and are
/// never mutated afterwards; the presenter hands out shared references only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mountain {
    /// Feed identifier. Not guaranteed unique.
    #[serde(rename = "ID")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Kind of entry, e.g. "brom".
    #[serde(rename = "type")]
    pub kind: String,

    /// Operator or company.
    pub company: String,

    /// Location (region or country).
    pub location: String,

    /// Category label.
    pub category: String,

    /// Height in meters.
    pub size: i64,

    /// Cost figure as reported by the feed.
    pub cost: i64,

    /// Wiki and image links.
    pub auxdata: AuxData,
}

impl Mountain {
    /// Summary shown in the overlay when a row is selected.
    pub fn summary(&self) -> String {
        format!("{} - {}: {}", self.name, self.location, self.size)
    }

    /// Link to the wiki page.
    pub fn wiki(&self) -> &str {
        &self.auxdata.wiki
    }

    /// Link to the image.
    pub fn img(&self) -> &str {
        &self.auxdata.img
    }
}

/// List rows show the name only.
impl fmt::Display for Mountain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kebnekaise() -> Mountain {
        Mountain {
            id: "1".to_string(),
            name: "Kebnekaise".to_string(),
            location: "Lapland".to_string(),
            size: 2096,
            auxdata: AuxData::new("w", "i"),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(kebnekaise().summary(), "Kebnekaise - Lapland: 2096");
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(kebnekaise().to_string(), "Kebnekaise");
    }

    #[test]
    fn test_serializes_with_feed_keys() {
        let value = serde_json::to_value(kebnekaise()).unwrap();
        assert_eq!(value["ID"], "1");
        assert_eq!(value["type"], "");
        assert_eq!(value["auxdata"]["wiki"], "w");
        assert!(value.get("kind").is_none());
    }
}
