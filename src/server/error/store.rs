use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported by the managed data store itself.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a non-success status.
    ///
    /// Covers rejected queries, policy violations and constraint failures on insert.
    /// Results in a 500 Internal Server Error with a generic message returned to
    /// the client; the store's message is only logged.
    #[error("Data store rejected {operation} on `{table}` with {status}: {message}")]
    Rejected {
        /// Table the request targeted
        table: &'static str,
        /// `select` or `insert`
        operation: &'static str,
        /// HTTP status returned by the store
        status: StatusCode,
        /// Error message from the response body, or the raw body
        message: String,
    },

    /// The store URL cannot be extended with the REST path.
    #[error("Data store URL `{base}` cannot hold the REST path: {source}")]
    BaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// The store URL could not be extended with the table path.
    #[error("Invalid data store endpoint for `{table}`: {source}")]
    Endpoint {
        table: &'static str,
        #[source]
        source: url::ParseError,
    },
}
