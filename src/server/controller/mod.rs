//! HTTP request handlers for the `/api` routes.
//!
//! Controllers convert request DTOs into service parameters, call the service layer
//! and convert domain models back into response DTOs. Each handler is annotated for
//! the OpenAPI document served at `/api/docs`.

pub mod application;
pub mod site;
pub mod team;
pub mod update;
