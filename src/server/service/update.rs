//! Server updates feed service.

use crate::{
    model::update::RECENT_UPDATES_LIMIT,
    server::{
        data::server_update::ServerUpdateRepository,
        error::AppError,
        model::update::{GetRecentUpdatesParam, ServerUpdate},
        store::StoreClient,
    },
};

/// Service providing the server updates feed.
pub struct UpdateService<'a> {
    pub store: &'a StoreClient,
}

impl<'a> UpdateService<'a> {
    /// Creates a new UpdateService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `UpdateService` - New service instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Retrieves the ten most recently published updates, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerUpdate>)` - At most ten updates, possibly empty
    /// - `Err(AppError)` - Store request failed
    pub async fn get_recent(&self) -> Result<Vec<ServerUpdate>, AppError> {
        ServerUpdateRepository::new(self.store)
            .get_recent(GetRecentUpdatesParam {
                limit: RECENT_UPDATES_LIMIT,
            })
            .await
    }
}
