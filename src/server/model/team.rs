//! Team roster domain model.

use chrono::{DateTime, Utc};

use crate::model::team::TeamMemberDto;

/// Staff member shown on the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Free-text role label.
    pub role: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub discord_tag: Option<String>,
    /// Ascending sort key; not unique.
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            id: self.id,
            name: self.name,
            role: self.role,
            avatar_url: self.avatar_url,
            bio: self.bio,
            discord_tag: self.discord_tag,
            display_order: self.display_order,
            created_at: self.created_at,
        }
    }

    /// Converts a store row to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            avatar_url: entity.avatar_url,
            bio: entity.bio,
            discord_tag: entity.discord_tag,
            display_order: entity.display_order,
            created_at: entity.created_at,
        }
    }
}
