//! Sitemap record types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often crawlers should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,

    pub last_modified: DateTime<Utc>,

    pub change_frequency: ChangeFrequency,

    /// Relative weight in `[0, 1]`.
    pub priority: f32,

    /// Locale code → URL of the same page in that locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<BTreeMap<String, String>>,
}
