//! In-memory implementation of every collaborator, seeded from a JSON document.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Reverse;
use std::io::ErrorKind;
use std::path::Path;
use tribes_models::{
    by_name, Activity, AwardedBadge, Badge, Book, ContentSource, ContentSourceKind, Creation,
    GitHubRepository, NewsFeedEntry, Talk, Tweet,
};

use super::{
    ActivityService, BadgeService, BookService, ContentSourceDirectory, CreationService,
    FeedService, GitHubService, TalkService,
};
use crate::errors::{FeedError, ServiceError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub content_source: String,
    pub badge_id: u32,
    #[serde(default)]
    pub awarded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub content_source: String,
    pub score: u64,
    #[serde(default)]
    pub number_of_tweets: u64,
    #[serde(default)]
    pub number_of_news_feed_entries: u64,
    #[serde(default)]
    pub number_of_talks: u64,
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// Layout of the seed document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub content_sources: Vec<ContentSource>,
    pub badges: Vec<Badge>,
    pub awards: Vec<AwardRecord>,
    pub tweets: Vec<Tweet>,
    pub news_feed_entries: Vec<NewsFeedEntry>,
    pub talks: Vec<Talk>,
    pub books: Vec<Book>,
    pub creations: Vec<Creation>,
    pub repositories: Vec<GitHubRepository>,
    pub activity: Vec<ActivityRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: SeedData,
}

impl InMemoryStore {
    pub fn new(data: SeedData) -> Self {
        Self { data }
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let data: SeedData = serde_json::from_str(json)?;
        Ok(Self::new(data))
    }

    /// Load the seed document at `path`. A missing file yields an empty store.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(json) => {
                let store = Self::from_json(&json)?;
                tracing::info!(
                    path = %path.display(),
                    content_sources = store.data.content_sources.len(),
                    tweets = store.data.tweets.len(),
                    news_feed_entries = store.data.news_feed_entries.len(),
                    "Loaded seed data"
                );
                Ok(store)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Seed data not found, starting with an empty directory");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn source(&self, short_name: &str) -> Option<&ContentSource> {
        self.data
            .content_sources
            .iter()
            .find(|cs| cs.short_name == short_name)
    }

    fn to_activity(&self, record: &ActivityRecord) -> Option<Activity> {
        let content_source = self.source(&record.content_source)?.clone();
        Some(Activity {
            content_source,
            score: record.score,
            number_of_tweets: record.number_of_tweets,
            number_of_news_feed_entries: record.number_of_news_feed_entries,
            number_of_talks: record.number_of_talks,
            last_activity_at: record.last_activity_at,
        })
    }
}

fn belongs_to(sources: &[ContentSource], short_name: &str) -> bool {
    sources.iter().any(|cs| cs.short_name == short_name)
}

/// Slice out one page of an already ordered list. Pages start at 1; page 0 reads as 1.
fn page_of<T: Clone>(items: Vec<&T>, page: u64, page_size: u64) -> Vec<T> {
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let skip = usize::try_from(page.max(1) - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    items.into_iter().skip(skip).take(size).cloned().collect()
}

#[async_trait]
impl ContentSourceDirectory for InMemoryStore {
    async fn find_by_short_name(&self, short_name: &str) -> Option<ContentSource> {
        self.source(short_name).cloned()
    }

    async fn find_by_twitter_id(&self, twitter_id: &str) -> Option<ContentSource> {
        self.data
            .content_sources
            .iter()
            .find(|cs| cs.has_twitter_id(twitter_id))
            .cloned()
    }

    async fn content_sources(&self, kind: ContentSourceKind) -> Vec<ContentSource> {
        let mut sources: Vec<ContentSource> = self
            .data
            .content_sources
            .iter()
            .filter(|cs| cs.kind == kind)
            .cloned()
            .collect();
        sources.sort_by(by_name);
        sources
    }
}

#[async_trait]
impl FeedService<Tweet> for InMemoryStore {
    async fn count(&self, sources: &[ContentSource]) -> u64 {
        self.data
            .tweets
            .iter()
            .filter(|t| belongs_to(sources, &t.content_source))
            .count() as u64
    }

    async fn recent(&self, sources: &[ContentSource], page: u64, page_size: u64) -> Result<Vec<Tweet>, FeedError> {
        let mut tweets: Vec<&Tweet> = self
            .data
            .tweets
            .iter()
            .filter(|t| belongs_to(sources, &t.content_source))
            .collect();
        tweets.sort_by_key(|t| Reverse((t.timestamp, t.id)));
        Ok(page_of(tweets, page, page_size))
    }
}

#[async_trait]
impl FeedService<NewsFeedEntry> for InMemoryStore {
    async fn count(&self, sources: &[ContentSource]) -> u64 {
        self.data
            .news_feed_entries
            .iter()
            .filter(|e| belongs_to(sources, &e.content_source))
            .count() as u64
    }

    async fn recent(
        &self,
        sources: &[ContentSource],
        page: u64,
        page_size: u64,
    ) -> Result<Vec<NewsFeedEntry>, FeedError> {
        let mut entries: Vec<&NewsFeedEntry> = self
            .data
            .news_feed_entries
            .iter()
            .filter(|e| belongs_to(sources, &e.content_source))
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(page_of(entries, page, page_size))
    }
}

#[async_trait]
impl BadgeService for InMemoryStore {
    async fn definitions(&self) -> Vec<Badge> {
        self.data.badges.clone()
    }

    async fn awarded_badges(&self, source: &ContentSource) -> Vec<AwardedBadge> {
        self.data
            .awards
            .iter()
            .filter(|award| award.content_source == source.short_name)
            .filter_map(|award| {
                let badge = self.data.badges.iter().find(|b| b.id == award.badge_id);
                if badge.is_none() {
                    tracing::debug!(
                        badge_id = award.badge_id,
                        content_source = %award.content_source,
                        "Skipping award for unknown badge"
                    );
                }
                badge.map(|b| AwardedBadge::awarded(b.clone(), &source.short_name, award.awarded_at))
            })
            .collect()
    }
}

#[async_trait]
impl ActivityService for InMemoryStore {
    async fn activity(&self, source: &ContentSource) -> Option<Activity> {
        self.data
            .activity
            .iter()
            .find(|record| record.content_source == source.short_name)
            .and_then(|record| self.to_activity(record))
    }

    async fn activity_list_for_people(&self) -> Vec<Activity> {
        let mut activity: Vec<Activity> = self
            .data
            .activity
            .iter()
            .filter_map(|record| self.to_activity(record))
            .filter(|a| a.content_source.is_person())
            .collect();
        activity.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| by_name(&a.content_source, &b.content_source))
        });
        activity
    }
}

#[async_trait]
impl TalkService for InMemoryStore {
    async fn talks(&self, source: &ContentSource) -> Vec<Talk> {
        let mut talks: Vec<Talk> = self
            .data
            .talks
            .iter()
            .filter(|t| t.content_source == source.short_name)
            .cloned()
            .collect();
        talks.sort_by_key(|t| Reverse(t.date));
        talks
    }
}

#[async_trait]
impl GitHubService for InMemoryStore {
    async fn repositories(&self, source: &ContentSource) -> Vec<GitHubRepository> {
        let Some(github_id) = source.github_id.as_deref() else {
            return Vec::new();
        };

        let mut repositories: Vec<GitHubRepository> = self
            .data
            .repositories
            .iter()
            .filter(|r| r.github_id.eq_ignore_ascii_case(github_id))
            .cloned()
            .collect();
        repositories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        repositories
    }
}

#[async_trait]
impl BookService for InMemoryStore {
    async fn books(&self, source: &ContentSource) -> Vec<Book> {
        self.data
            .books
            .iter()
            .filter(|b| b.content_source == source.short_name)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CreationService for InMemoryStore {
    async fn creations(&self, source: &ContentSource) -> Vec<Creation> {
        self.data
            .creations
            .iter()
            .filter(|c| c.content_source == source.short_name)
            .cloned()
            .collect()
    }
}
