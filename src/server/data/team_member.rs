use crate::server::{
    error::AppError,
    model::team::TeamMember,
    store::{Direction, Select, StoreClient},
};

/// Repository providing read access to the team roster.
pub struct TeamMemberRepository<'a> {
    store: &'a StoreClient,
}

impl<'a> TeamMemberRepository<'a> {
    /// Creates a new TeamMemberRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the data store client
    ///
    /// # Returns
    /// - `TeamMemberRepository` - New repository instance
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Gets every team member ordered by display order, lowest first.
    ///
    /// Members sharing a display order come back in the store's default order.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamMember>)` - All members, possibly empty
    /// - `Err(AppError)` - Store request failed or was refused
    pub async fn get_all(&self) -> Result<Vec<TeamMember>, AppError> {
        use entity::team_member::{DISPLAY_ORDER, TABLE};

        let query = Select::all().order_by(DISPLAY_ORDER, Direction::Ascending);
        let rows = self
            .store
            .select::<entity::team_member::Model>(TABLE, &query)
            .await?;

        Ok(rows.into_iter().map(TeamMember::from_entity).collect())
    }
}
