use crate::server::{
    error::AppError,
    model::update::{GetRecentUpdatesParam, ServerUpdate},
    store::{Direction, Select, StoreClient},
};

/// Repository providing read access to the server updates feed.
pub struct ServerUpdateRepository<'a> {
    store: &'a StoreClient,
}

impl<'a> ServerUpdateRepository<'a> {
    /// Creates a new ServerUpdateRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `ServerUpdateRepository` - New repository instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Gets the most recently published updates, newest first.
    ///
    /// # Arguments
    /// - `param` - Maximum number of updates to return
    ///
    /// # Returns
    /// - `Ok(Vec<ServerUpdate>)` - Up to `param.limit` updates, possibly empty
    /// - `Err(AppError)` - Store request failed or was refused
    pub async fn get_recent(
        &self,
        param: GetRecentUpdatesParam,
    ) -> Result<Vec<ServerUpdate>, AppError> {
        use entity::server_update::{PUBLISHED_AT, TABLE};

        let query = Select::all()
            .order_by(PUBLISHED_AT, Direction::Descending)
            .limit(param.limit);
        let rows = self
            .store
            .select::<entity::server_update::Model>(TABLE, &query)
            .await?;

        Ok(rows.into_iter().map(ServerUpdate::from_entity).collect())
    }
}
