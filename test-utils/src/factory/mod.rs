//! Factory methods for creating test rows.
//!
//! This module provides factory methods for creating store rows with sensible defaults,
//! reducing boilerplate in tests. Rows are plain `entity` models; seed them into the
//! fake store with `TestBuilder::with_rows()`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let member = factory::create_team_member();
//! let update = factory::create_server_update();
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::team_member::TeamMemberFactory::new()
//!     .name("Kez")
//!     .role("Owner")
//!     .display_order(0)
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `team_member` - Roster rows
//! - `server_update` - Update feed rows
//! - `whitelist_application` - Application insert payloads
//! - `helpers` - Shared id generation

pub mod helpers;
pub mod server_update;
pub mod team_member;
pub mod whitelist_application;

// Re-export commonly used factory functions for concise usage
pub use server_update::create_server_update;
pub use team_member::create_team_member;
pub use whitelist_application::create_application;
