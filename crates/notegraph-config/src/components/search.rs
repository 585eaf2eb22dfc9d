//! Search component configuration
//!
//! Default narrowing applied by callers that do not pass explicit filters,
//! plus the two enumerations shared with the search engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which note field a text query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Title, content, path or any tag
    #[default]
    All,
    /// Title only
    Title,
    /// Content only
    Content,
    /// Path only
    Path,
}

impl ContentType {
    /// Wire name of this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::Title => "title",
            ContentType::Content => "content",
            ContentType::Path => "path",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recency window applied to a note's `updated_at`
///
/// Unrecognized names parse as [`DateRange::All`], which disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateRange {
    /// No recency filter
    #[default]
    All,
    /// Updated within the last 7 days
    Last7Days,
    /// Updated within the last 30 days
    Last30Days,
    /// Updated within the last 90 days
    Last90Days,
}

impl DateRange {
    /// Length of the window in days, `None` for [`DateRange::All`]
    pub fn days(&self) -> Option<i64> {
        match self {
            DateRange::All => None,
            DateRange::Last7Days => Some(7),
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
        }
    }

    /// Wire name of this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Last7Days => "7days",
            DateRange::Last30Days => "30days",
            DateRange::Last90Days => "90days",
        }
    }
}

impl FromStr for DateRange {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "7days" => DateRange::Last7Days,
            "30days" => DateRange::Last30Days,
            "90days" => DateRange::Last90Days,
            _ => DateRange::All,
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let range = raw.parse().unwrap_or_default();
        if range == DateRange::All && raw != "all" {
            tracing::debug!(value = %raw, "Unrecognized date range, filter disabled");
        }
        Ok(range)
    }
}

/// Search component configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Field matched by queries when the caller does not choose one
    pub content_type: ContentType,
    /// Recency window applied when the caller does not choose one
    pub date_range: DateRange,
}
