use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: &str = "server_updates";

/// Column used to order the feed, newest first.
pub const PUBLISHED_AT: &str = "published_at";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub title: String,
    pub description: String,
    pub update_type: String,
    pub version: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
