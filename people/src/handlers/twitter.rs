use actix_web::web;

use crate::resolver::profile_path;
use crate::state::AppState;
use crate::view::Outcome;

/// GET /twitter/{handle}
///
/// Known handles redirect to the person or tribe profile, anything else to
/// the public twitter profile.
pub async fn find_by_twitter_id(path: web::Path<String>, state: web::Data<AppState>) -> Outcome {
    let handle = path.into_inner();

    match state.resolver.resolve_by_social_handle(&handle).await {
        Some(source) => Outcome::Redirect(profile_path(&source)),
        None => {
            tracing::debug!(handle = %handle, "Unknown twitter handle, redirecting to twitter");
            Outcome::Redirect(state.config.twitter_profile(&handle))
        }
    }
}
