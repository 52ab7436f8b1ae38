use std::net::SocketAddr;

use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::{
    error::TestError,
    store::{FakeStore, RecordedRequest},
};

/// Running fake data store for one test.
///
/// The store is served from a background task that is aborted when the context is
/// dropped, so each test gets an isolated store.
pub struct TestContext {
    /// Shared state of the fake store.
    pub store: FakeStore,

    /// Key the fake store accepts.
    pub api_key: String,

    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Binds an ephemeral local port and starts serving `store` on it.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Store accepting connections
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(store: FakeStore, api_key: String) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = store.router();
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            store,
            api_key,
            addr,
            server,
        })
    }

    /// Base URL to configure the store client with, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.requests()
    }

    /// Current rows of `table`, including rows inserted by the code under test.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.store.rows(table)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}
