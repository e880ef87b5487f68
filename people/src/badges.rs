use tribes_models::{AwardedBadge, Badge, ContentSource};

/// Add every applicable badge the content source hasn't earned yet as an
/// unawarded entry, then put the list in display order.
pub fn complete_badges(
    mut awarded: Vec<AwardedBadge>,
    definitions: &[Badge],
    source: &ContentSource,
) -> Vec<AwardedBadge> {
    for badge in definitions {
        if !badge.badge_type.applies_to(source.kind) {
            continue;
        }

        let candidate = AwardedBadge::unawarded(badge.clone(), &source.short_name);
        if !awarded.contains(&candidate) {
            awarded.push(candidate);
        }
    }

    awarded.sort_by(AwardedBadge::display_order);
    awarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribes_models::{BadgeType, ContentSourceKind};

    fn definitions() -> Vec<Badge> {
        [
            (1, "Tweeter", BadgeType::Person),
            (2, "Speaker", BadgeType::PersonAndTribe),
            (3, "Meetup", BadgeType::Tribe),
            (4, "Author", BadgeType::Person),
        ]
        .into_iter()
        .map(|(id, name, badge_type)| Badge {
            id,
            name: name.to_string(),
            description: String::new(),
            badge_type,
        })
        .collect()
    }

    #[test]
    fn test_person_gets_person_and_shared_badges() {
        let definitions = definitions();
        let ann = ContentSource::new("ann", "Ann", ContentSourceKind::Person);
        let awarded = vec![AwardedBadge::awarded(definitions[1].clone(), "ann", None)];

        let badges = complete_badges(awarded, &definitions, &ann);

        let summary: Vec<(u32, bool)> = badges.iter().map(|b| (b.badge_id(), b.awarded)).collect();
        assert_eq!(summary, vec![(2, true), (4, false), (1, false)]);
    }

    #[test]
    fn test_tribe_gets_tribe_and_shared_badges() {
        let definitions = definitions();
        let jug = ContentSource::new("jug", "Java Users", ContentSourceKind::Tribe);

        let badges = complete_badges(Vec::new(), &definitions, &jug);

        let ids: Vec<u32> = badges.iter().map(AwardedBadge::badge_id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert!(badges.iter().all(|b| !b.awarded));
    }

    #[test]
    fn test_no_duplicates_when_everything_is_awarded() {
        let definitions = definitions();
        let ann = ContentSource::new("ann", "Ann", ContentSourceKind::Person);
        let awarded: Vec<AwardedBadge> = definitions
            .iter()
            .filter(|b| b.badge_type.applies_to(ContentSourceKind::Person))
            .map(|b| AwardedBadge::awarded(b.clone(), "ann", None))
            .collect();

        let badges = complete_badges(awarded, &definitions, &ann);

        assert_eq!(badges.len(), 3);
        assert!(badges.iter().all(|b| b.awarded));
    }
}
