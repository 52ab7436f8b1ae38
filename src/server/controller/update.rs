use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, update::ServerUpdateDto},
    server::{error::AppError, service::update::UpdateService, state::AppState},
};

/// Tag for grouping update endpoints in OpenAPI documentation
pub static UPDATE_TAG: &str = "update";

/// Get recent server updates.
///
/// Returns the ten most recently published updates, newest first.
///
/// # Returns
/// - `200 OK` - Up to ten updates, possibly empty
/// - `500 Internal Server Error` - Data store request failed
#[utoipa::path(
    get,
    path = "/api/updates",
    tag = UPDATE_TAG,
    responses(
        (status = 200, description = "Recent updates, newest first", body = Vec<ServerUpdateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_updates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let updates = UpdateService::new(&state.store).get_recent().await?;

    let dtos: Vec<ServerUpdateDto> = updates.into_iter().map(|u| u.into_dto()).collect();

    Ok(Json(dtos))
}
