//! Client for the managed data store.
//!
//! The store exposes each table under `<base>/rest/v1/<table>`. Every request carries
//! the API key twice, as the `apikey` header and as a bearer token. Reads use
//! [`Select`] for ordering and limits; inserts send a JSON array of rows and ask for
//! no response body.

pub mod query;

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::server::error::{store::StoreError, AppError};

pub use query::{Direction, Select};

const REST_PATH: &str = "rest/v1/";

/// Error body returned by the store on failure.
#[derive(Deserialize)]
struct StoreErrorBody {
    message: String,
}

/// Handle to the data store's REST interface.
///
/// Built once at startup and cloned into the application state. Cloning is cheap:
/// `reqwest::Client` shares its connection pool between clones.
#[derive(Clone, Debug)]
pub struct StoreClient {
    http: reqwest::Client,
    rest_url: Url,
    api_key: String,
}

impl StoreClient {
    /// Creates a client for the store at `base_url`.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - Project URL of the store, with or without a trailing slash
    /// - `api_key` - Key sent with every request
    ///
    /// # Returns
    /// - `Ok(StoreClient)` - Client rooted at `<base_url>/rest/v1/`
    /// - `Err(StoreError::BaseUrl)` - `base_url` cannot hold a path (e.g. `mailto:`)
    pub fn new(
        http: reqwest::Client,
        base_url: &Url,
        api_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let rest_url = base.join(REST_PATH).map_err(|source| StoreError::BaseUrl {
            base: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            http,
            rest_url,
            api_key: api_key.into(),
        })
    }

    /// Fetches the rows of `table` matching `query`.
    ///
    /// # Returns
    /// - `Ok(Vec<T>)` - Rows in the order requested, possibly empty
    /// - `Err(AppError::StoreErr)` - Store answered with a non-success status
    /// - `Err(AppError::ReqwestErr)` - Store unreachable or rows failed to decode
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &'static str,
        query: &Select,
    ) -> Result<Vec<T>, AppError> {
        let request = self.http.get(self.endpoint(table)?).query(&query.params());

        let response = self.authorized(request).send().await?;
        let response = Self::check(response, table, "select").await?;

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Inserts `rows` into `table`.
    ///
    /// # Returns
    /// - `Ok(())` - All rows were accepted
    /// - `Err(AppError::StoreErr)` - Store refused the insert (constraint, policy, ...)
    /// - `Err(AppError::ReqwestErr)` - Store unreachable
    pub async fn insert<T: Serialize>(&self, table: &'static str, rows: &[T]) -> Result<(), AppError> {
        let request = self
            .http
            .post(self.endpoint(table)?)
            .header("Prefer", "return=minimal")
            .json(rows);

        let response = self.authorized(request).send().await?;
        Self::check(response, table, "insert").await?;

        Ok(())
    }

    fn endpoint(&self, table: &'static str) -> Result<Url, StoreError> {
        self.rest_url
            .join(table)
            .map_err(|source| StoreError::Endpoint { table, source })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Passes successful responses through and turns the rest into `StoreError`.
    async fn check(
        response: Response,
        table: &'static str,
        operation: &'static str,
    ) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<StoreErrorBody>(&body)
            .map(|err| err.message)
            .unwrap_or(body);

        Err(StoreError::Rejected {
            table,
            operation,
            status,
            message,
        }
        .into())
    }
}

#[cfg(test)]
mod test;
