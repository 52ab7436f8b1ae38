use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, team::TeamMemberDto},
    server::{error::AppError, service::team::TeamService, state::AppState},
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Get the staff roster.
///
/// Returns every team member ordered by display order, lowest first.
///
/// # Returns
/// - `200 OK` - All team members, possibly empty
/// - `500 Internal Server Error` - Data store request failed
#[utoipa::path(
    get,
    path = "/api/team",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Team members in display order", body = Vec<TeamMemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let members = TeamService::new(&state.store).get_roster().await?;

    let dtos: Vec<TeamMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok(Json(dtos))
}
