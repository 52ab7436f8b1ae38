//! Server-side API backend.
//!
//! This module contains the serving process's half of the site: configuration, the
//! data store client, and the `/api` routes the browser calls. The backend uses Axum
//! as the web framework and `reqwest` to reach the managed data store.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Fixed query shapes and logging
//! - **Data Layer** (`data/`) - Store requests and row-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Store** (`store`) - REST client for the managed data store
//! - **State** (`state`) - Shared application state (store client, invite link)
//! - **Startup** (`startup`) - Construction of the HTTP and store clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** calls the repository with the query shape for the operation
//! 4. **Data** issues one store request, converts rows to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
