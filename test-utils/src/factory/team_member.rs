//! Team member factory for creating roster rows.

use chrono::Utc;
use entity::team_member::Model;

use crate::factory::helpers::{next_id, next_uuid};

/// Factory for creating team member rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = TeamMemberFactory::new()
///     .name("Kez")
///     .role("Owner")
///     .discord_tag("kez")
///     .build();
/// ```
pub struct TeamMemberFactory {
    model: Model,
}

impl TeamMemberFactory {
    /// Creates a new TeamMemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"`
    /// - role: `"Support"`
    /// - display_order: `{id}`
    /// - avatar_url, bio, discord_tag: `None`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            model: Model {
                id: next_uuid(),
                name: format!("Member {}", id),
                role: "Support".to_string(),
                avatar_url: None,
                bio: None,
                discord_tag: None,
                display_order: id as i32,
                created_at: Utc::now(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.model.name = name.to_string();
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.model.role = role.to_string();
        self
    }

    pub fn display_order(mut self, display_order: i32) -> Self {
        self.model.display_order = display_order;
        self
    }

    pub fn avatar_url(mut self, avatar_url: &str) -> Self {
        self.model.avatar_url = Some(avatar_url.to_string());
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.model.bio = Some(bio.to_string());
        self
    }

    pub fn discord_tag(mut self, discord_tag: &str) -> Self {
        self.model.discord_tag = Some(discord_tag.to_string());
        self
    }

    pub fn build(self) -> Model {
        self.model
    }
}

impl Default for TeamMemberFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a team member row with default values.
pub fn create_team_member() -> Model {
    TeamMemberFactory::new().build()
}
