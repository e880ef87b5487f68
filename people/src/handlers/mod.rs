use actix_web::web;

pub mod people;
pub mod system;
pub mod twitter;

/// Route table for the people service.
///
/// `{name}` only matches lowercase letters, digits and hyphens, `{page}` only
/// ASCII digits; anything else falls through to the not-found view.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(system::health))
        .route("/404", web::get().to(system::not_found))
        .route("/people", web::get().to(people::view_people))
        .route("/people/{name:[a-z0-9-]*}", web::get().to(people::view_person))
        .route("/people/{name:[a-z0-9-]*}/talks", web::get().to(people::view_talks))
        .route("/people/{name:[a-z0-9-]*}/code", web::get().to(people::view_code))
        .route("/people/{name:[a-z0-9-]*}/books", web::get().to(people::view_books))
        .route("/people/{name:[a-z0-9-]*}/creations", web::get().to(people::view_creations))
        .route("/people/{name:[a-z0-9-]*}/tweets", web::get().to(people::view_tweets))
        .route("/people/{name:[a-z0-9-]*}/tweets/{page:[0-9]+}", web::get().to(people::view_tweets_page))
        .route("/people/{name:[a-z0-9-]*}/content", web::get().to(people::view_content))
        .route("/people/{name:[a-z0-9-]*}/content/{page:[0-9]+}", web::get().to(people::view_content_page))
        .route("/twitter/{handle:[a-zA-Z0-9_]*}", web::get().to(twitter::find_by_twitter_id))
        .default_service(web::to(system::not_found));
}
