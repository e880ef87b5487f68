use std::sync::Arc;
use tribes_models::ContentSource;

use crate::services::ContentSourceDirectory;

/// Resolves route parameters to content sources.
#[derive(Clone)]
pub struct ContentSourceResolver {
    directory: Arc<dyn ContentSourceDirectory>,
}

impl ContentSourceResolver {
    pub fn new(directory: Arc<dyn ContentSourceDirectory>) -> Self {
        Self { directory }
    }

    /// The person with this short name. Tribes do not resolve here.
    pub async fn resolve(&self, short_name: &str) -> Option<ContentSource> {
        let source = self.directory.find_by_short_name(short_name).await?;
        if source.is_person() {
            Some(source)
        } else {
            tracing::debug!(short_name = %short_name, "Short name belongs to a tribe, not a person");
            None
        }
    }

    /// The person or tribe using this twitter handle.
    pub async fn resolve_by_social_handle(&self, handle: &str) -> Option<ContentSource> {
        self.directory.find_by_twitter_id(handle).await
    }
}

/// Canonical internal URL of a content source's profile.
pub fn profile_path(source: &ContentSource) -> String {
    if source.is_tribe() {
        format!("/tribes/{}", source.short_name)
    } else {
        format!("/people/{}", source.short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryStore;
    use tribes_models::ContentSourceKind;

    fn resolver() -> ContentSourceResolver {
        let store = InMemoryStore::from_json(
            r#"{"contentSources": [
                {"shortName": "ann", "name": "Ann", "kind": "Person", "twitterId": "annj"},
                {"shortName": "jug", "name": "Java Users", "kind": "Tribe", "twitterId": "jerseyjug"}
            ]}"#,
        )
        .unwrap();
        ContentSourceResolver::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_resolve_people_only() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("ann").await.unwrap().name, "Ann");
        assert!(resolver.resolve("jug").await.is_none());
        assert!(resolver.resolve("nobody").await.is_none());
    }

    #[actix_web::test]
    async fn test_resolve_by_social_handle_any_kind() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_by_social_handle("annj").await.unwrap().short_name, "ann");
        assert_eq!(resolver.resolve_by_social_handle("jerseyjug").await.unwrap().short_name, "jug");
        assert!(resolver.resolve_by_social_handle("someone").await.is_none());
    }

    #[test]
    fn test_profile_path() {
        let ann = ContentSource::new("ann", "Ann", ContentSourceKind::Person);
        let jug = ContentSource::new("jug", "Java Users", ContentSourceKind::Tribe);
        assert_eq!(profile_path(&ann), "/people/ann");
        assert_eq!(profile_path(&jug), "/tribes/jug");
    }
}
