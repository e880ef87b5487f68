use actix_web::web;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tribes_models::{by_twitter_followers_descending, ContentSource, ContentSourceKind, NewsFeedEntry, Tweet};

use crate::badges::complete_badges;
use crate::pagination::{page_size, paginate};
use crate::services::FeedService;
use crate::state::AppState;
use crate::view::{NavSection, Outcome, ViewModel};

#[derive(Debug, Deserialize)]
pub struct PeopleQuery {
    pub sort: Option<String>,
}

/// Ordering requested for the people list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleSort {
    Followers,
    Activity,
    Name,
}

impl PeopleSort {
    /// Case-insensitive; anything unrecognised sorts by name.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("followers") {
            PeopleSort::Followers
        } else if value.eq_ignore_ascii_case("activity") {
            PeopleSort::Activity
        } else {
            PeopleSort::Name
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeopleSort::Followers => "followers",
            PeopleSort::Activity => "activity",
            PeopleSort::Name => "name",
        }
    }
}

/// GET /people
pub async fn view_people(query: web::Query<PeopleQuery>, state: web::Data<AppState>) -> Outcome {
    let services = &state.services;
    let sort = query.into_inner().sort.map(|s| PeopleSort::parse(&s));

    let people: Vec<ContentSource> = match sort {
        Some(PeopleSort::Activity) => services
            .activity
            .activity_list_for_people()
            .await
            .into_iter()
            .map(|activity| activity.content_source)
            .collect(),
        Some(PeopleSort::Followers) => {
            let mut people = services.directory.content_sources(ContentSourceKind::Person).await;
            people.sort_by(by_twitter_followers_descending);
            people
        }
        Some(PeopleSort::Name) | None => services.directory.content_sources(ContentSourceKind::Person).await,
    };

    let mut view = ViewModel::new("people", state.site_name(), &["People"])
        .with("numberOfPeople", people.len())
        .with("people", &people);
    if let Some(sort) = sort {
        view = view.with("sort", sort.as_str());
    }

    Outcome::Render(view)
}

/// GET /people/{name}
pub async fn view_person(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let Some(person) = state.resolver.resolve(&path).await else {
        return Outcome::not_found(state.site_name());
    };
    let services = &state.services;

    let awarded = services.badges.awarded_badges(&person).await;
    let definitions = services.badges.definitions().await;
    let badges = complete_badges(awarded, &definitions, &person);
    let activity = services.activity.activity(&person).await;

    Outcome::Render(
        ViewModel::profile("person", state.site_name(), &person, NavSection::Summary, &[person.name.as_str()])
            .with("badges", &badges)
            .with("activity", &activity),
    )
}

/// GET /people/{name}/talks
pub async fn view_talks(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let Some(person) = state.resolver.resolve(&path).await else {
        return Outcome::not_found(state.site_name());
    };

    let talks = state.services.talks.talks(&person).await;
    let countries: BTreeSet<&str> = talks.iter().map(|talk| talk.country.as_str()).collect();

    Outcome::Render(
        ViewModel::profile("person-talks", state.site_name(), &person, NavSection::Talks, &[person.name.as_str(), "Talks"])
            .with("numberOfCountries", countries.len())
            .with("countries", &countries)
            .with("talks", &talks),
    )
}

/// GET /people/{name}/code
pub async fn view_code(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let Some(person) = state.resolver.resolve(&path).await else {
        return Outcome::not_found(state.site_name());
    };

    let mut view = ViewModel::profile("person-code", state.site_name(), &person, NavSection::Code, &[person.name.as_str(), "Code"]);
    if person.has_github_id() {
        let repositories = state.services.github.repositories(&person).await;
        view = view.with("gitHubRepositories", &repositories);
    }

    Outcome::Render(view)
}

/// GET /people/{name}/books
pub async fn view_books(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let Some(person) = state.resolver.resolve(&path).await else {
        return Outcome::not_found(state.site_name());
    };

    let books = state.services.books.books(&person).await;
    Outcome::Render(
        ViewModel::profile("person-books", state.site_name(), &person, NavSection::Books, &[person.name.as_str(), "Books"])
            .with("books", &books),
    )
}

/// GET /people/{name}/creations
pub async fn view_creations(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let Some(person) = state.resolver.resolve(&path).await else {
        return Outcome::not_found(state.site_name());
    };

    let creations = state.services.creations.creations(&person).await;
    Outcome::Render(
        ViewModel::profile(
            "person-creations",
            state.site_name(),
            &person,
            NavSection::Creations,
            &[person.name.as_str(), "Creations"],
        )
        .with("creations", &creations),
    )
}

/// A paged feed sub-page of a profile.
struct FeedSection<T: Send + 'static> {
    view: &'static str,
    nav: NavSection,
    label: &'static str,
    /// Model attribute holding the page's items
    items: &'static str,
    page_size: u64,
    feed: Arc<dyn FeedService<T>>,
}

fn tweets_section(state: &AppState) -> FeedSection<Tweet> {
    FeedSection {
        view: "person-tweets",
        nav: NavSection::Tweets,
        label: "Tweets",
        items: "tweets",
        page_size: page_size::RECENT_TWEETS,
        feed: state.services.tweets.clone(),
    }
}

fn content_section(state: &AppState) -> FeedSection<NewsFeedEntry> {
    FeedSection {
        view: "person-content",
        nav: NavSection::Content,
        label: "Content",
        items: "newsFeedEntries",
        page_size: page_size::RECENT_NEWS_FEED_ENTRIES,
        feed: state.services.news_feed.clone(),
    }
}

/// Route segments are digits only; a value too large to parse is past the last page.
fn requested_page(segment: &str) -> u64 {
    segment.parse::<u64>().unwrap_or(u64::MAX)
}

async fn view_feed<T>(state: &AppState, short_name: &str, page: u64, section: FeedSection<T>) -> Outcome
where
    T: Serialize + Send + 'static,
{
    let Some(person) = state.resolver.resolve(short_name).await else {
        return Outcome::not_found(state.site_name());
    };

    let result = paginate(
        section.feed.as_ref(),
        std::slice::from_ref(&person),
        page,
        section.page_size,
        &person.short_name,
    )
    .await;

    let view = match result.pagination {
        Some(pagination) => {
            let page_label = format!("Page {}", pagination.current_page);
            ViewModel::profile(
                section.view,
                state.site_name(),
                &person,
                section.nav,
                &[person.name.as_str(), section.label, page_label.as_str()],
            )
            .with(section.items, &result.items)
            .with("currentPage", pagination.current_page)
            .with("maxPage", pagination.max_page)
            .with("total", pagination.total)
        }
        None => ViewModel::profile(
            section.view,
            state.site_name(),
            &person,
            section.nav,
            &[person.name.as_str(), section.label],
        ),
    };

    Outcome::Render(view)
}

/// GET /people/{name}/tweets
pub async fn view_tweets(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    view_feed(&state, &path, 1, tweets_section(&state)).await
}

/// GET /people/{name}/tweets/{page}
pub async fn view_tweets_page(path: web::Path<(String, String)>, state: web::Data<AppState>) -> Outcome {
    let (short_name, page) = path.into_inner();
    view_feed(&state, &short_name, requested_page(&page), tweets_section(&state)).await
}

/// GET /people/{name}/content
pub async fn view_content(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    view_feed(&state, &path, 1, content_section(&state)).await
}

/// GET /people/{name}/content/{page}
pub async fn view_content_page(path: web::Path<(String, String)>, state: web::Data<AppState>) -> Outcome {
    let (short_name, page) = path.into_inner();
    view_feed(&state, &short_name, requested_page(&page), content_section(&state)).await
}
