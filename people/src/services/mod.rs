//! Collaborator contracts consumed by the profile handlers.
//!
//! The handlers only read through these traits; where the data lives is up to
//! the implementation wired into [`crate::state::AppState`].

use async_trait::async_trait;
use tribes_models::{
    Activity, AwardedBadge, Badge, Book, ContentSource, ContentSourceKind, Creation,
    GitHubRepository, Talk,
};

use crate::errors::FeedError;

pub mod memory;

pub use memory::InMemoryStore;

/// Lookup of people and tribes.
#[async_trait]
pub trait ContentSourceDirectory: Send + Sync {
    async fn find_by_short_name(&self, short_name: &str) -> Option<ContentSource>;

    async fn find_by_twitter_id(&self, twitter_id: &str) -> Option<ContentSource>;

    /// All content sources of a kind, in name order.
    async fn content_sources(&self, kind: ContentSourceKind) -> Vec<ContentSource>;
}

/// A paged feed of items attributed to content sources, newest first.
#[async_trait]
pub trait FeedService<T>: Send + Sync
where
    T: Send + 'static,
{
    async fn count(&self, sources: &[ContentSource]) -> u64;

    /// Items on `page` (1-based) when the feed is cut into pages of `page_size`.
    async fn recent(&self, sources: &[ContentSource], page: u64, page_size: u64) -> Result<Vec<T>, FeedError>;
}

#[async_trait]
pub trait BadgeService: Send + Sync {
    /// Every badge that can be awarded.
    async fn definitions(&self) -> Vec<Badge>;

    async fn awarded_badges(&self, source: &ContentSource) -> Vec<AwardedBadge>;
}

#[async_trait]
pub trait ActivityService: Send + Sync {
    async fn activity(&self, source: &ContentSource) -> Option<Activity>;

    /// Activity for every person, most active first.
    async fn activity_list_for_people(&self) -> Vec<Activity>;
}

#[async_trait]
pub trait TalkService: Send + Sync {
    async fn talks(&self, source: &ContentSource) -> Vec<Talk>;
}

#[async_trait]
pub trait GitHubService: Send + Sync {
    async fn repositories(&self, source: &ContentSource) -> Vec<GitHubRepository>;
}

#[async_trait]
pub trait BookService: Send + Sync {
    async fn books(&self, source: &ContentSource) -> Vec<Book>;
}

#[async_trait]
pub trait CreationService: Send + Sync {
    async fn creations(&self, source: &ContentSource) -> Vec<Creation>;
}
