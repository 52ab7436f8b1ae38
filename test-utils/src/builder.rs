use std::collections::HashMap;

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{
    context::TestContext,
    error::TestError,
    store::{Failure, FakeStore, StoreState},
};

/// API key the fake store accepts unless overridden with `with_api_key()`.
pub const TEST_API_KEY: &str = "test-anon-key";

/// Builder for creating test contexts backed by a fake data store.
///
/// Provides a fluent interface for seeding tables and injecting failures. Call
/// `build()` to start the fake store on an ephemeral local port.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_rows(entity::server_update::TABLE, [factory::create_server_update()])
///     .with_failure(entity::whitelist_application::TABLE, StatusCode::CONFLICT, "duplicate")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Key the fake store expects in the `apikey` header.
    api_key: String,

    /// Rows to seed, per table. Serialization is deferred to `build()`.
    tables: Vec<(String, Result<Vec<Value>, serde_json::Error>)>,

    /// Tables that answer every request with an error.
    failures: HashMap<String, Failure>,
}

impl TestBuilder {
    /// Creates a new test builder with empty tables and no failures.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            api_key: TEST_API_KEY.to_string(),
            tables: Vec::new(),
            failures: HashMap::new(),
        }
    }

    /// Sets the API key the fake store accepts.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    /// Seeds `table` with `rows`, appended after any rows seeded earlier.
    ///
    /// Rows are stored in the given order, which is the order the fake store falls
    /// back to for ties when sorting.
    ///
    /// # Arguments
    /// - `table` - Table name, e.g. `entity::team_member::TABLE`
    /// - `rows` - Any serializable rows, typically from `factory`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_rows<T: Serialize>(
        mut self,
        table: &str,
        rows: impl IntoIterator<Item = T>,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| serde_json::to_value(&row))
            .collect();
        self.tables.push((table.to_string(), rows));
        self
    }

    /// Makes every request to `table` fail with `status` and `message`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_failure(mut self, table: &str, status: StatusCode, message: &str) -> Self {
        self.failures.insert(
            table.to_string(),
            Failure {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Starts the fake store with the configured tables and failures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running fake store
    /// - `Err(TestError::Serialize)` - A seeded row failed to serialize
    /// - `Err(TestError::Io)` - Failed to bind the local listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut tables: HashMap<String, Vec<Value>> = HashMap::new();
        for (table, rows) in self.tables {
            tables.entry(table).or_default().extend(rows?);
        }

        let store = FakeStore::new(StoreState {
            api_key: self.api_key.clone(),
            tables,
            failures: self.failures,
            requests: Vec::new(),
        });

        TestContext::start(store, self.api_key).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
