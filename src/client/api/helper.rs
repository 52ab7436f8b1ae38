use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(error_from(status, response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Helper function to parse empty success responses (201 Created)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(error_from(status, response).await);
    }

    Ok(())
}

/// Reads the `{"error": ...}` body of a failed response, falling back to its raw text.
///
/// The body can only be read once, so it is taken as text and then parsed.
async fn error_from(status: u64, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = match serde_json::from_str::<ErrorDto>(&body) {
        Ok(error_dto) => error_dto.error,
        Err(_) => body,
    };

    ApiError { status, message }
}

/// Create a same-origin GET request
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::SameOrigin)
}

/// Create a same-origin POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::SameOrigin)
        .header("Content-Type", "application/json")
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
