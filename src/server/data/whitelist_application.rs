use crate::server::{
    error::AppError, model::application::CreateApplicationParam, store::StoreClient,
};

/// Repository providing write access to whitelist applications.
///
/// Applications are only ever created here; reviewing them happens outside this
/// application.
pub struct WhitelistApplicationRepository<'a> {
    store: &'a StoreClient,
}

impl<'a> WhitelistApplicationRepository<'a> {
    /// Creates a new WhitelistApplicationRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `WhitelistApplicationRepository` - New repository instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Inserts one application row.
    ///
    /// # Arguments
    /// - `param` - Applicant-supplied fields
    ///
    /// # Returns
    /// - `Ok(())` - Row accepted by the store
    /// - `Err(AppError)` - Store unreachable or insert refused
    pub async fn create(&self, param: CreateApplicationParam) -> Result<(), AppError> {
        let row = param.into_entity();

        self.store
            .insert(entity::whitelist_application::TABLE, &[row])
            .await
    }
}
