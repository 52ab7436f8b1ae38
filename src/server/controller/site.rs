use axum::{extract::State, response::IntoResponse, Json};

use crate::{model::site::SiteConfigDto, server::state::AppState};

/// Tag for grouping site endpoints in OpenAPI documentation
pub static SITE_TAG: &str = "site";

/// Get public site settings.
///
/// Returns the configuration values the browser needs, currently the community
/// Discord invite used by every "Join Discord" link.
///
/// # Returns
/// - `200 OK` - Site settings; `invite_url` is empty when none is configured
#[utoipa::path(
    get,
    path = "/api/site",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "Public site settings", body = SiteConfigDto)
    ),
)]
pub async fn get_site_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(SiteConfigDto {
        invite_url: state.discord_invite_url.clone(),
    })
}
