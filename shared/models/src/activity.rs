use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content_source::ContentSource;

/// Recent engagement of one content source, as computed by the activity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub content_source: ContentSource,
    pub score: u64,
    #[serde(default)]
    pub number_of_tweets: u64,
    #[serde(default)]
    pub number_of_news_feed_entries: u64,
    #[serde(default)]
    pub number_of_talks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
}
