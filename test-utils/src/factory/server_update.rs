//! Server update factory for creating feed rows.

use chrono::{DateTime, Duration, Utc};
use entity::server_update::Model;

use crate::factory::helpers::{next_id, next_uuid};

/// Factory for creating server update rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let update = ServerUpdateFactory::new()
///     .title("Police overhaul")
///     .update_type("feature")
///     .version("1.4.0")
///     .published_days_ago(3)
///     .build();
/// ```
pub struct ServerUpdateFactory {
    model: Model,
}

impl ServerUpdateFactory {
    /// Creates a new ServerUpdateFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Update {id}"`
    /// - update_type: `"announcement"`
    /// - version: `None`
    /// - published_at, created_at: now
    pub fn new() -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            model: Model {
                id: next_uuid(),
                title: format!("Update {}", id),
                description: format!("Details for update {}", id),
                update_type: "announcement".to_string(),
                version: None,
                published_at: now,
                created_at: now,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.model.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.model.description = description.to_string();
        self
    }

    pub fn update_type(mut self, update_type: &str) -> Self {
        self.model.update_type = update_type.to_string();
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.model.version = Some(version.to_string());
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.model.published_at = published_at;
        self
    }

    pub fn published_days_ago(self, days: i64) -> Self {
        self.published_at(Utc::now() - Duration::days(days))
    }

    pub fn build(self) -> Model {
        self.model
    }
}

impl Default for ServerUpdateFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a server update row with default values.
pub fn create_server_update() -> Model {
    ServerUpdateFactory::new().build()
}
