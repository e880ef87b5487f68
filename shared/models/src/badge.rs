use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::content_source::ContentSourceKind;

/// Which kinds of content source a badge can be awarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeType {
    Person,
    Tribe,
    PersonAndTribe,
}

impl BadgeType {
    pub fn applies_to(&self, kind: ContentSourceKind) -> bool {
        matches!(
            (self, kind),
            (BadgeType::PersonAndTribe, _)
                | (BadgeType::Person, ContentSourceKind::Person)
                | (BadgeType::Tribe, ContentSourceKind::Tribe)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
}

/// A badge as shown on a profile: either awarded, or listed as still to earn.
///
/// Two entries are equal when they refer to the same badge, whatever their
/// award state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardedBadge {
    pub badge: Badge,
    pub content_source: String,
    pub awarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarded_at: Option<DateTime<Utc>>,
}

impl AwardedBadge {
    pub fn awarded(badge: Badge, content_source: impl Into<String>, awarded_at: Option<DateTime<Utc>>) -> Self {
        Self {
            badge,
            content_source: content_source.into(),
            awarded: true,
            awarded_at,
        }
    }

    pub fn unawarded(badge: Badge, content_source: impl Into<String>) -> Self {
        Self {
            badge,
            content_source: content_source.into(),
            awarded: false,
            awarded_at: None,
        }
    }

    pub fn badge_id(&self) -> u32 {
        self.badge.id
    }

    /// Display order: awarded first, earliest award first (undated awards
    /// after dated ones), then badge name and id.
    pub fn display_order(a: &AwardedBadge, b: &AwardedBadge) -> Ordering {
        b.awarded
            .cmp(&a.awarded)
            .then_with(|| match (a.awarded_at, b.awarded_at) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.badge.name.cmp(&b.badge.name))
            .then_with(|| a.badge.id.cmp(&b.badge.id))
    }
}

impl PartialEq for AwardedBadge {
    fn eq(&self, other: &Self) -> bool {
        self.badge.id == other.badge.id
    }
}

impl Eq for AwardedBadge {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn badge(id: u32, name: &str, badge_type: BadgeType) -> Badge {
        Badge {
            id,
            name: name.to_string(),
            description: String::new(),
            badge_type,
        }
    }

    #[test]
    fn test_badge_type_applicability() {
        assert!(BadgeType::Person.applies_to(ContentSourceKind::Person));
        assert!(!BadgeType::Person.applies_to(ContentSourceKind::Tribe));
        assert!(BadgeType::Tribe.applies_to(ContentSourceKind::Tribe));
        assert!(BadgeType::PersonAndTribe.applies_to(ContentSourceKind::Person));
        assert!(BadgeType::PersonAndTribe.applies_to(ContentSourceKind::Tribe));
    }

    #[test]
    fn test_equality_ignores_award_state() {
        let b = badge(1, "Speaker", BadgeType::Person);
        let awarded = AwardedBadge::awarded(b.clone(), "ann", None);
        let unawarded = AwardedBadge::unawarded(b, "ann");
        assert_eq!(awarded, unawarded);
    }

    #[test]
    fn test_display_order() {
        let early = Utc.with_ymd_and_hms(2013, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();

        let mut badges = vec![
            AwardedBadge::unawarded(badge(4, "Author", BadgeType::Person), "ann"),
            AwardedBadge::awarded(badge(3, "Blogger", BadgeType::Person), "ann", None),
            AwardedBadge::awarded(badge(2, "Speaker", BadgeType::Person), "ann", Some(late)),
            AwardedBadge::awarded(badge(1, "Tweeter", BadgeType::Person), "ann", Some(early)),
            AwardedBadge::unawarded(badge(5, "Aardvark", BadgeType::Person), "ann"),
        ];
        badges.sort_by(AwardedBadge::display_order);

        let ids: Vec<u32> = badges.iter().map(AwardedBadge::badge_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 4]);
    }
}
