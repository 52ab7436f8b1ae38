use crate::{client::model::error::ApiError, model::update::ServerUpdateDto};

use super::helper::{get, parse_response, send_request};

/// Fetches the newest server updates, newest first.
pub async fn get_server_updates() -> Result<Vec<ServerUpdateDto>, ApiError> {
    let response = send_request(get("/api/updates")).await?;
    parse_response(response).await
}
