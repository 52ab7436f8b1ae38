use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TeamMemberDto {
    pub id: String,
    pub name: String,
    /// Free-text role label as entered by staff.
    pub role: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub discord_tag: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl TeamMemberDto {
    /// Presentation bucket for this member's role label.
    pub fn staff_role(&self) -> StaffRole {
        StaffRole::from_label(&self.role)
    }

    /// Uppercased first character of the name, shown when there is no avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Known staff roles, used only to pick an icon and badge colour.
///
/// Role labels are free text in the store. Labels that don't match a known role
/// exactly (case included) fall into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaffRole {
    Owner,
    Admin,
    Developer,
    Support,
    Other,
}

impl StaffRole {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Owner" => Self::Owner,
            "Admin" => Self::Admin,
            "Developer" => Self::Developer,
            "Support" => Self::Support,
            _ => Self::Other,
        }
    }

    /// Tailwind classes for the role badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Owner => "text-yellow-400 border-yellow-400/20 bg-yellow-400/5",
            Self::Admin => "text-red-400 border-red-400/20 bg-red-400/5",
            Self::Developer => "text-blue-400 border-blue-400/20 bg-blue-400/5",
            Self::Support => "text-emerald-400 border-emerald-400/20 bg-emerald-400/5",
            Self::Other => "text-gray-400 border-gray-400/20 bg-gray-400/5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, role: &str) -> TeamMemberDto {
        TeamMemberDto {
            id: "1".to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar_url: None,
            bio: None,
            discord_tag: None,
            display_order: 0,
            created_at: Utc::now(),
        }
    }

    /// Tests that each known label maps to its own role.
    ///
    /// Expected: exact labels resolve to the matching variant
    #[test]
    fn maps_known_role_labels() {
        assert_eq!(StaffRole::from_label("Owner"), StaffRole::Owner);
        assert_eq!(StaffRole::from_label("Admin"), StaffRole::Admin);
        assert_eq!(StaffRole::from_label("Developer"), StaffRole::Developer);
        assert_eq!(StaffRole::from_label("Support"), StaffRole::Support);
    }

    /// Tests that labels outside the known set fall back.
    ///
    /// Matching is exact, so different casing and surrounding whitespace also
    /// fall back rather than matching a known role.
    ///
    /// Expected: `Other` with the neutral badge
    #[test]
    fn unknown_role_labels_fall_back() {
        for label in ["Moderator", "owner", " Admin", "", "Head of Lore"] {
            let role = StaffRole::from_label(label);
            assert_eq!(role, StaffRole::Other, "label {label:?}");
            assert_eq!(
                role.badge_class(),
                "text-gray-400 border-gray-400/20 bg-gray-400/5"
            );
        }
    }

    /// Tests that every known role gets a distinct badge.
    #[test]
    fn known_roles_have_distinct_badges() {
        let classes = [
            StaffRole::Owner,
            StaffRole::Admin,
            StaffRole::Developer,
            StaffRole::Support,
            StaffRole::Other,
        ]
        .map(StaffRole::badge_class);

        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    /// Tests the avatar fallback initial.
    ///
    /// Expected: uppercased first character, empty for an empty name
    #[test]
    fn initial_is_uppercased_first_char() {
        assert_eq!(member("jordan", "Admin").initial(), "J");
        assert_eq!(member("Él", "Admin").initial(), "É");
        assert_eq!(member("", "Admin").initial(), "");
    }

    /// Tests that the DTO resolves its role label.
    #[test]
    fn member_resolves_staff_role() {
        assert_eq!(member("Sam", "Developer").staff_role(), StaffRole::Developer);
        assert_eq!(member("Sam", "Mapper").staff_role(), StaffRole::Other);
    }
}
