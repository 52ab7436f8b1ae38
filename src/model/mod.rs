//! Types shared between the browser application and the serving process.
//!
//! DTOs cross the `/api` boundary as JSON. The presentation and form logic that
//! sits next to them is plain Rust so it compiles, and is tested, on every target.

pub mod api;
pub mod application;
pub mod site;
pub mod status;
pub mod team;
pub mod update;
