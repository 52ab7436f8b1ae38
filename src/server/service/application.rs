//! Whitelist application service.

use dioxus_logger::tracing;

use crate::server::{
    data::whitelist_application::WhitelistApplicationRepository, error::AppError,
    model::application::CreateApplicationParam, store::StoreClient,
};

/// Service accepting whitelist applications.
pub struct ApplicationService<'a> {
    pub store: &'a StoreClient,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `ApplicationService` - New service instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Stores one application for later review.
    ///
    /// Exactly one insert is issued; failures are not retried.
    ///
    /// # Arguments
    /// - `param` - Validated applicant fields
    ///
    /// # Returns
    /// - `Ok(())` - Application stored with pending status
    /// - `Err(AppError)` - Store unreachable or insert refused
    pub async fn submit(&self, param: CreateApplicationParam) -> Result<(), AppError> {
        let in_game_name = param.in_game_name.clone();

        WhitelistApplicationRepository::new(self.store)
            .create(param)
            .await?;

        tracing::info!("Whitelist application received for {}", in_game_name);

        Ok(())
    }
}
