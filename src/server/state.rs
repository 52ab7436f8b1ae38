//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Data store client for reading the roster and feed and storing applications
//! - Community invite link handed to the browser

use crate::server::store::StoreClient;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup from the immutable configuration and then
/// cloned for each incoming request via Axum's state extraction. Nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Client for the managed data store.
    ///
    /// Wraps a `reqwest::Client`, so clones share one connection pool.
    pub store: StoreClient,

    /// Community Discord invite link, empty when not configured.
    pub discord_invite_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Data store client
    /// - `discord_invite_url` - Invite link for "Join Discord" buttons
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: StoreClient, discord_invite_url: String) -> Self {
        Self {
            store,
            discord_invite_url,
        }
    }
}
