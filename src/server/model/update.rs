//! Server update domain model.

use chrono::{DateTime, Utc};

use crate::model::update::ServerUpdateDto;

/// Post in the server updates feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category tag as stored; unknown tags are passed through.
    pub update_type: String,
    pub version: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ServerUpdate {
    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ServerUpdateDto {
        ServerUpdateDto {
            id: self.id,
            title: self.title,
            description: self.description,
            update_type: self.update_type,
            version: self.version,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }

    /// Converts a store row to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::server_update::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            update_type: entity.update_type,
            version: entity.version,
            published_at: entity.published_at,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for fetching the most recent updates.
#[derive(Debug, Clone, Copy)]
pub struct GetRecentUpdatesParam {
    /// Maximum number of updates to return.
    pub limit: u64,
}
