use reqwest::redirect::Policy;

use crate::server::{config::Config, error::AppError, store::StoreClient};

/// Builds the HTTP client used for data store requests.
///
/// Redirects are disabled: the store answers directly and a redirect would forward
/// the API key to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the data store client from configuration.
///
/// No request is made here; an unreachable store shows up on the first fetch.
///
/// # Arguments
/// - `config` - Application configuration containing the store URL and key
/// - `http_client` - HTTP client to issue requests with
///
/// # Returns
/// - `Ok(StoreClient)` - Client ready to be placed in the application state
/// - `Err(AppError::StoreErr)` - Store URL cannot hold the REST path
pub fn connect_to_store(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<StoreClient, AppError> {
    let store = StoreClient::new(http_client, &config.store_url, config.store_api_key.clone())?;

    Ok(store)
}
