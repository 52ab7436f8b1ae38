use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Number of updates shown in the feed.
pub const RECENT_UPDATES_LIMIT: u64 = 10;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerUpdateDto {
    pub id: String,
    pub title: String,
    /// Body text; line breaks are significant.
    pub description: String,
    /// Raw category tag, shown as the badge label.
    pub update_type: String,
    pub version: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ServerUpdateDto {
    pub fn category(&self) -> UpdateCategory {
        UpdateCategory::from_tag(&self.update_type)
    }

    /// Publish date as day, short month and year, e.g. `5 Jan 2025`.
    pub fn published_label(&self) -> String {
        self.published_at.format("%-d %b %Y").to_string()
    }

    pub fn version_label(&self) -> Option<String> {
        self.version.as_ref().map(|v| format!("v{}", v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateCategory {
    Feature,
    Bugfix,
    Announcement,
    Maintenance,
    /// Any tag outside the known set. Presented as an announcement.
    Other,
}

impl UpdateCategory {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "feature" => Self::Feature,
            "bugfix" => Self::Bugfix,
            "announcement" => Self::Announcement,
            "maintenance" => Self::Maintenance,
            _ => Self::Other,
        }
    }

    /// The category whose icon and colours are used for display.
    pub fn presentation(self) -> Self {
        match self {
            Self::Other => Self::Announcement,
            known => known,
        }
    }

    /// Tailwind classes for the icon tile and badge.
    pub fn badge_class(self) -> &'static str {
        match self.presentation() {
            Self::Feature => "bg-blue-500/10 text-blue-400 border-blue-400/20",
            Self::Bugfix => "bg-emerald-500/10 text-emerald-400 border-emerald-400/20",
            Self::Maintenance => "bg-red-500/10 text-red-400 border-red-400/20",
            Self::Announcement | Self::Other => {
                "bg-yellow-500/10 text-yellow-400 border-yellow-400/20"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn update(update_type: &str, version: Option<&str>) -> ServerUpdateDto {
        ServerUpdateDto {
            id: "u1".to_string(),
            title: "Patch".to_string(),
            description: "Line one\nLine two".to_string(),
            update_type: update_type.to_string(),
            version: version.map(str::to_string),
            published_at: Utc.with_ymd_and_hms(2025, 1, 5, 18, 30, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 5, 18, 0, 0).unwrap(),
        }
    }

    /// Tests the known category tags.
    #[test]
    fn maps_known_tags() {
        assert_eq!(UpdateCategory::from_tag("feature"), UpdateCategory::Feature);
        assert_eq!(UpdateCategory::from_tag("bugfix"), UpdateCategory::Bugfix);
        assert_eq!(
            UpdateCategory::from_tag("announcement"),
            UpdateCategory::Announcement
        );
        assert_eq!(
            UpdateCategory::from_tag("maintenance"),
            UpdateCategory::Maintenance
        );
    }

    /// Tests that unrecognized tags are presented as announcements.
    ///
    /// Expected: `Other`, with the announcement presentation and colours
    #[test]
    fn unknown_tags_present_as_announcement() {
        let announcement = UpdateCategory::Announcement.badge_class();

        for tag in ["event", "Feature", "", "hotfix"] {
            let category = UpdateCategory::from_tag(tag);
            assert_eq!(category, UpdateCategory::Other, "tag {tag:?}");
            assert_eq!(category.presentation(), UpdateCategory::Announcement);
            assert_eq!(category.badge_class(), announcement);
        }
    }

    /// Tests that known categories keep their own presentation.
    #[test]
    fn known_categories_present_as_themselves() {
        for category in [
            UpdateCategory::Feature,
            UpdateCategory::Bugfix,
            UpdateCategory::Announcement,
            UpdateCategory::Maintenance,
        ] {
            assert_eq!(category.presentation(), category);
        }
    }

    /// Tests the date and version labels on an update card.
    #[test]
    fn formats_card_labels() {
        let with_version = update("feature", Some("1.2.0"));
        assert_eq!(with_version.published_label(), "5 Jan 2025");
        assert_eq!(with_version.version_label().as_deref(), Some("v1.2.0"));
        assert_eq!(with_version.category(), UpdateCategory::Feature);

        assert_eq!(update("bugfix", None).version_label(), None);
    }

    /// Tests that descriptions survive a JSON round trip byte for byte.
    ///
    /// Expected: embedded newlines preserved
    #[test]
    fn description_newlines_are_preserved() {
        let json = r#"{
            "id": "u2",
            "title": "Weekend maintenance",
            "description": "Servers down Saturday.\n\nBack Sunday.",
            "update_type": "maintenance",
            "version": null,
            "published_at": "2025-02-01T10:00:00+00:00",
            "created_at": "2025-02-01T09:00:00.123456+00:00"
        }"#;

        let dto: ServerUpdateDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.description, "Servers down Saturday.\n\nBack Sunday.");
        assert_eq!(dto.published_label(), "1 Feb 2025");
    }
}
