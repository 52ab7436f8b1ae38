use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, application::CreateApplicationDto},
    server::{
        error::AppError, model::application::CreateApplicationParam,
        service::application::ApplicationService, state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Submit a whitelist application.
///
/// Stores one application for review by staff. The applicant must have agreed to
/// the server rules and be at least 16.
///
/// # Arguments
/// - `state` - Application state containing the data store client
/// - `payload` - Applicant fields
///
/// # Returns
/// - `201 Created` - Application stored
/// - `400 Bad Request` - Rules not agreed or applicant under age
/// - `500 Internal Server Error` - Data store refused or could not be reached
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application stored"),
        (status = 400, description = "Rules not agreed or applicant under age", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateApplicationParam::from_dto(payload)?;

    ApplicationService::new(&state.store).submit(param).await?;

    Ok(StatusCode::CREATED)
}
