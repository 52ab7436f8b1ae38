//! County Lines Test Utils
//!
//! Provides shared testing utilities for the site's server code. The server talks to a
//! managed data store over HTTP, so tests run against an in-process fake of that store:
//! a small axum app bound to an ephemeral local port that speaks the same REST dialect
//! (`/rest/v1/<table>`, `select`/`order`/`limit` query parameters, `apikey` header).
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for seeding tables and injecting failures
//! - **TestContext**: Running fake store with its base URL and recorded requests
//! - **FakeStore**: Shared state of the fake (tables, failures, request log)
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_roster() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_rows(entity::team_member::TABLE, [factory::create_team_member()])
//!         .build()
//!         .await?;
//!
//!     let url = test.base_url();
//!     // Point the store client at `url`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod store;
