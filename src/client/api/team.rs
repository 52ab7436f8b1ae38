use crate::{client::model::error::ApiError, model::team::TeamMemberDto};

use super::helper::{get, parse_response, send_request};

/// Fetches the staff roster, already ordered by display order.
pub async fn get_team_members() -> Result<Vec<TeamMemberDto>, ApiError> {
    let response = send_request(get("/api/team")).await?;
    parse_response(response).await
}
