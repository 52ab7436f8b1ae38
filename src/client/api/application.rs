use crate::{client::model::error::ApiError, model::application::CreateApplicationDto};

use super::helper::{parse_empty_response, post, send_request, serialize_json};

pub async fn create_application(payload: CreateApplicationDto) -> Result<(), ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/applications").body(body)).await?;
    parse_empty_response(response).await
}
