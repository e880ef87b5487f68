//! Count-then-fetch pagination over a [`FeedService`].

use serde::Serialize;
use tribes_models::ContentSource;

use crate::services::FeedService;

/// Items per page for each paged feed.
pub mod page_size {
    pub const RECENT_TWEETS: u64 = 25;
    pub const RECENT_NEWS_FEED_ENTRIES: u64 = 20;
}

/// Where a page sits in its feed. `1 <= current_page <= max_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current_page: u64,
    pub max_page: u64,
    pub total: u64,
}

/// One page of a feed. `pagination` is `None` exactly when the feed is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Option<PageState>,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }
}

/// Number of pages needed for `count` items; at least one.
pub fn number_of_pages(count: u64, page_size: u64) -> u64 {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, max_page]`.
pub fn validate_page(page: u64, max_page: u64) -> u64 {
    page.clamp(1, max_page.max(1))
}

/// Fetch the requested page of `feed` for `sources`.
///
/// An empty feed yields no pagination state at all. A failed fetch is logged
/// against `subject` and yields an empty page that still carries its
/// pagination state.
pub async fn paginate<T>(
    feed: &dyn FeedService<T>,
    sources: &[ContentSource],
    requested_page: u64,
    page_size: u64,
    subject: &str,
) -> Paginated<T>
where
    T: Send + 'static,
{
    let total = feed.count(sources).await;
    if total == 0 {
        return Paginated::empty();
    }

    let max_page = number_of_pages(total, page_size);
    let current_page = validate_page(requested_page, max_page);

    let items = match feed.recent(sources, current_page, page_size).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                subject = %subject,
                page = current_page,
                error = %e,
                "Couldn't retrieve feed page for {}", subject
            );
            Vec::new()
        }
    };

    Paginated {
        items,
        pagination: Some(PageState {
            current_page,
            max_page,
            total,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FeedError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tribes_models::ContentSourceKind;

    /// Feed of `total` numbered items that records the pages it was asked for.
    struct NumberFeed {
        total: u64,
        fail: bool,
        requested: Mutex<Vec<u64>>,
    }

    impl NumberFeed {
        fn new(total: u64) -> Self {
            Self {
                total,
                fail: false,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn failing(total: u64) -> Self {
            Self {
                fail: true,
                ..Self::new(total)
            }
        }
    }

    #[async_trait]
    impl FeedService<u64> for NumberFeed {
        async fn count(&self, _sources: &[ContentSource]) -> u64 {
            self.total
        }

        async fn recent(&self, _sources: &[ContentSource], page: u64, page_size: u64) -> Result<Vec<u64>, FeedError> {
            self.requested.lock().unwrap().push(page);
            if self.fail {
                return Err(FeedError::Unavailable("test".to_string()));
            }
            let start = (page - 1) * page_size;
            Ok((start..(start + page_size).min(self.total)).collect())
        }
    }

    fn sources() -> Vec<ContentSource> {
        vec![ContentSource::new("ann", "Ann", ContentSourceKind::Person)]
    }

    #[test]
    fn test_number_of_pages() {
        assert_eq!(number_of_pages(23, 10), 3);
        assert_eq!(number_of_pages(20, 10), 2);
        assert_eq!(number_of_pages(1, 25), 1);
        assert_eq!(number_of_pages(0, 25), 1);
    }

    #[test]
    fn test_validate_page() {
        assert_eq!(validate_page(0, 3), 1);
        assert_eq!(validate_page(2, 3), 2);
        assert_eq!(validate_page(5, 3), 3);
        assert_eq!(validate_page(u64::MAX, 3), 3);
    }

    #[actix_web::test]
    async fn test_page_beyond_last_is_clamped() {
        let feed = NumberFeed::new(23);
        let page = paginate(&feed, &sources(), 5, 10, "ann").await;

        assert_eq!(
            page.pagination,
            Some(PageState {
                current_page: 3,
                max_page: 3,
                total: 23
            })
        );
        assert_eq!(page.items, vec![20, 21, 22]);
        assert_eq!(*feed.requested.lock().unwrap(), vec![3]);
    }

    #[actix_web::test]
    async fn test_page_zero_reads_as_first() {
        let feed = NumberFeed::new(23);
        let page = paginate(&feed, &sources(), 0, 10, "ann").await;

        assert_eq!(page.pagination.unwrap().current_page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[actix_web::test]
    async fn test_empty_feed_has_no_pagination() {
        let feed = NumberFeed::new(0);
        let page = paginate(&feed, &sources(), 2, 10, "ann").await;

        assert_eq!(page, Paginated::empty());
        assert!(feed.requested.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_failed_fetch_keeps_pagination() {
        let feed = NumberFeed::failing(45);
        let page = paginate(&feed, &sources(), 2, 20, "ann").await;

        assert!(page.items.is_empty());
        assert_eq!(
            page.pagination,
            Some(PageState {
                current_page: 2,
                max_page: 3,
                total: 45
            })
        );
    }
}
