use std::sync::Arc;
use tribes_config::AppConfig;
use tribes_models::{NewsFeedEntry, Tweet};

use crate::resolver::ContentSourceResolver;
use crate::services::{
    ActivityService, BadgeService, BookService, ContentSourceDirectory, CreationService,
    FeedService, GitHubService, TalkService,
};

/// The services a profile page reads from.
#[derive(Clone)]
pub struct Collaborators {
    pub directory: Arc<dyn ContentSourceDirectory>,
    pub badges: Arc<dyn BadgeService>,
    pub activity: Arc<dyn ActivityService>,
    pub talks: Arc<dyn TalkService>,
    pub github: Arc<dyn GitHubService>,
    pub books: Arc<dyn BookService>,
    pub creations: Arc<dyn CreationService>,
    pub tweets: Arc<dyn FeedService<Tweet>>,
    pub news_feed: Arc<dyn FeedService<NewsFeedEntry>>,
}

impl Collaborators {
    /// Use one backend for every collaborator.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ContentSourceDirectory
            + BadgeService
            + ActivityService
            + TalkService
            + GitHubService
            + BookService
            + CreationService
            + FeedService<Tweet>
            + FeedService<NewsFeedEntry>
            + 'static,
    {
        Self {
            directory: store.clone(),
            badges: store.clone(),
            activity: store.clone(),
            talks: store.clone(),
            github: store.clone(),
            books: store.clone(),
            creations: store.clone(),
            tweets: store.clone(),
            news_feed: store,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub resolver: ContentSourceResolver,
    pub services: Collaborators,
}

impl AppState {
    pub fn new(config: AppConfig, services: Collaborators) -> Self {
        Self {
            resolver: ContentSourceResolver::new(services.directory.clone()),
            config,
            services,
        }
    }

    pub fn site_name(&self) -> &str {
        &self.config.site_name
    }
}
