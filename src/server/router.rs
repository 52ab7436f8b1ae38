use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        application::{__path_create_application, create_application},
        site::{__path_get_site_config, get_site_config},
        team::{__path_get_team_members, get_team_members},
        update::{__path_get_server_updates, get_server_updates},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "County Lines RP",
    description = "Roster, update feed and whitelist applications for the County Lines RP site"
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_site_config))
        .routes(routes!(get_team_members))
        .routes(routes!(get_server_updates))
        .routes(routes!(create_application))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
