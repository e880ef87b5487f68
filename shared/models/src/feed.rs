use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tweet, attributed to a content source by short name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: u64,
    pub content_source: String,
    pub twitter_id: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

/// An entry from a content source's blog or news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeedEntry {
    pub id: String,
    pub content_source: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: String,
    pub timestamp: DateTime<Utc>,
}
