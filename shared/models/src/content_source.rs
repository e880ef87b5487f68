use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Whether a content source is an individual or a collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentSourceKind {
    Person,
    Tribe,
}

/// A person or tribe, addressed by its URL-safe short name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSource {
    pub short_name: String,
    pub name: String,
    pub kind: ContentSourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(default)]
    pub twitter_followers_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContentSource {
    pub fn new(short_name: impl Into<String>, name: impl Into<String>, kind: ContentSourceKind) -> Self {
        Self {
            short_name: short_name.into(),
            name: name.into(),
            kind,
            twitter_id: None,
            twitter_followers_count: 0,
            github_id: None,
            profile_image_url: None,
            url: None,
        }
    }

    pub fn with_twitter(mut self, twitter_id: impl Into<String>, followers: u64) -> Self {
        self.twitter_id = Some(twitter_id.into());
        self.twitter_followers_count = followers;
        self
    }

    pub fn with_github(mut self, github_id: impl Into<String>) -> Self {
        self.github_id = Some(github_id.into());
        self
    }

    pub fn is_person(&self) -> bool {
        self.kind == ContentSourceKind::Person
    }

    pub fn is_tribe(&self) -> bool {
        self.kind == ContentSourceKind::Tribe
    }

    pub fn has_github_id(&self) -> bool {
        self.github_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    /// Case-insensitive match against the twitter id, ignoring a leading `@`.
    pub fn has_twitter_id(&self, handle: &str) -> bool {
        let handle = handle.trim_start_matches('@');
        self.twitter_id
            .as_deref()
            .map(|id| id.trim_start_matches('@'))
            .is_some_and(|id| id.eq_ignore_ascii_case(handle))
    }
}

/// Most followed first; ties fall back to display name.
pub fn by_twitter_followers_descending(a: &ContentSource, b: &ContentSource) -> Ordering {
    b.twitter_followers_count
        .cmp(&a.twitter_followers_count)
        .then_with(|| by_name(a, b))
}

/// Case-insensitive display name order.
pub fn by_name(a: &ContentSource, b: &ContentSource) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.short_name.cmp(&b.short_name))
}
