use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: &str = "team_members";

/// Column used to order the roster.
pub const DISPLAY_ORDER: &str = "display_order";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub discord_tag: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
