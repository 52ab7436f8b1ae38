use crate::{client::model::error::ApiError, model::site::SiteConfigDto};

use super::helper::{get, parse_response, send_request};

pub async fn get_site_config() -> Result<SiteConfigDto, ApiError> {
    let response = send_request(get("/api/site")).await?;
    parse_response(response).await
}
