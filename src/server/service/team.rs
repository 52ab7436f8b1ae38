//! Team roster service.

use crate::server::{
    data::team_member::TeamMemberRepository, error::AppError, model::team::TeamMember,
    store::StoreClient,
};

/// Service providing the staff roster.
pub struct TeamService<'a> {
    pub store: &'a StoreClient,
}

impl<'a> TeamService<'a> {
    /// Creates a new TeamService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `TeamService` - New service instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Retrieves the full roster in display order. No pagination.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamMember>)` - Every team member, possibly empty
    /// - `Err(AppError)` - Store request failed
    pub async fn get_roster(&self) -> Result<Vec<TeamMember>, AppError> {
        TeamMemberRepository::new(self.store).get_all().await
    }
}
