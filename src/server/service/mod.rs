//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying the fixed query shapes the site uses (roster order,
//!   feed cap)
//! - **Orchestration**: Calling repositories and logging outcomes
//! - **Domain Models**: Working with domain models rather than DTOs or store rows

pub mod application;
pub mod team;
pub mod update;
