//! View-models and the terminal outcome of a request.
//!
//! A rendered view is a JSON document naming its template and carrying a flat
//! map of camelCase attributes:
//!
//! ```json
//! {"view": "person-tweets", "model": {"person": {...}, "activeNav": "tweets", ...}}
//! ```

use actix_web::{
    body::BoxBody,
    http::{header, StatusCode},
    HttpRequest, HttpResponse, Responder, ResponseError,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tribes_models::ContentSource;

use crate::errors::ServiceError;

pub const NOT_FOUND_VIEW: &str = "404";

/// Sub-page of a profile, used to highlight the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Summary,
    Talks,
    Code,
    Books,
    Creations,
    Tweets,
    Content,
}

impl NavSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavSection::Summary => "summary",
            NavSection::Talks => "talks",
            NavSection::Code => "code",
            NavSection::Books => "books",
            NavSection::Creations => "creations",
            NavSection::Tweets => "tweets",
            NavSection::Content => "content",
        }
    }
}

/// Page title: non-empty parts joined with " - ", then the site name.
pub fn page_title(site_name: &str, parts: &[&str]) -> String {
    let parts: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        site_name.to_string()
    } else {
        format!("{} | {}", parts.join(" - "), site_name)
    }
}

/// A named view and its attributes.
///
/// An attribute that fails to serialize poisons the view: it answers with a
/// 500 instead of rendering with a missing value.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    view: &'static str,
    model: Map<String, Value>,
    #[serde(skip)]
    failure: Option<String>,
}

impl ViewModel {
    /// A view with the common attributes and its page title.
    pub fn new(view: &'static str, site_name: &str, title_parts: &[&str]) -> Self {
        Self {
            view,
            model: Map::new(),
            failure: None,
        }
        .with("siteName", site_name)
        .with("version", env!("CARGO_PKG_VERSION"))
        .with("pageTitle", page_title(site_name, title_parts))
    }

    /// A profile sub-page: always carries the person and the active navigation.
    pub fn profile(
        view: &'static str,
        site_name: &str,
        person: &ContentSource,
        nav: NavSection,
        title_parts: &[&str],
    ) -> Self {
        Self::new(view, site_name, title_parts)
            .with("person", person)
            .with("activeNav", nav.as_str())
    }

    pub fn with(mut self, name: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.model.insert(name.to_string(), value);
            }
            Err(e) => {
                tracing::error!(
                    view = %self.view,
                    attribute = %name,
                    error = %e,
                    "Failed to serialize view attribute"
                );
                if self.failure.is_none() {
                    self.failure = Some(format!("view {} attribute {}: {}", self.view, name, e));
                }
            }
        }
        self
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model.get(name)
    }

    fn into_response(self, status: StatusCode) -> HttpResponse {
        if let Some(failure) = &self.failure {
            return ServiceError::Internal(failure.clone()).error_response();
        }

        match serde_json::to_vec(&self) {
            Ok(body) => HttpResponse::build(status)
                .content_type("application/json")
                .body(body),
            Err(e) => ServiceError::Internal(e.to_string()).error_response(),
        }
    }
}

/// How a request ends.
#[derive(Debug, Clone)]
pub enum Outcome {
    Render(ViewModel),
    NotFound(ViewModel),
    Redirect(String),
}

impl Outcome {
    pub fn not_found(site_name: &str) -> Self {
        Outcome::NotFound(ViewModel::new(NOT_FOUND_VIEW, site_name, &["Not found"]))
    }
}

impl Responder for Outcome {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Outcome::Render(view) => view.into_response(StatusCode::OK),
            Outcome::NotFound(view) => view.into_response(StatusCode::NOT_FOUND),
            Outcome::Redirect(location) => HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use tribes_models::ContentSourceKind;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("site", &[]), "site");
        assert_eq!(page_title("site", &["People"]), "People | site");
        assert_eq!(
            page_title("site", &["Ann", "Tweets", "Page 2"]),
            "Ann - Tweets - Page 2 | site"
        );
        assert_eq!(page_title("site", &["Ann", ""]), "Ann | site");
    }

    #[test]
    fn test_profile_view_attributes() {
        let ann = ContentSource::new("ann", "Ann", ContentSourceKind::Person);
        let view = ViewModel::profile("person-books", "site", &ann, NavSection::Books, &["Ann", "Books"])
            .with("books", Vec::<String>::new());

        assert_eq!(view.view(), "person-books");
        assert_eq!(view.get("activeNav").unwrap(), "books");
        assert_eq!(view.get("pageTitle").unwrap(), "Ann - Books | site");
        assert_eq!(view.get("person").unwrap()["shortName"], "ann");
        assert_eq!(view.get("siteName").unwrap(), "site");
        assert!(view.get("books").unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_redirect_response() {
        let req = TestRequest::default().to_http_request();
        let resp = Outcome::Redirect("/people/ann".to_string()).respond_to(&req);

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/people/ann");
    }

    #[test]
    fn test_unserializable_attribute_is_a_server_error() {
        use std::collections::BTreeMap;

        // JSON object keys must be strings
        let tally = BTreeMap::from([((2013u16, 6u8), 3u32)]);
        let view = ViewModel::new("people", "site", &["People"])
            .with("tally", tally)
            .with("numberOfPeople", 2);

        assert!(view.get("tally").is_none());
        assert_eq!(view.get("numberOfPeople").unwrap(), 2);

        let req = TestRequest::default().to_http_request();
        let resp = Outcome::Render(view).respond_to(&req);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_response() {
        let req = TestRequest::default().to_http_request();
        let resp = Outcome::not_found("site").respond_to(&req);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
