use dioxus_logger::tracing;

use crate::client::model::error::ApiError;

/// Result of a one-shot list fetch as seen by the component that issued it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    /// Settles a finished fetch. Failures are logged under `what`.
    pub fn from_result(result: Result<T, ApiError>, what: &str) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => {
                tracing::error!("Failed to fetch {}: {}", what, err);
                Cache::Error(err)
            }
        }
    }

}

impl<T: Clone + Default> Cache<T> {
    /// Data to render once the fetch has settled.
    ///
    /// `None` while loading. A failed fetch renders the same as an empty result.
    pub fn settled(&self) -> Option<T> {
        match self {
            Cache::Loading => None,
            Cache::Fetched(data) => Some(data.clone()),
            Cache::Error(_) => Some(T::default()),
        }
    }
}
