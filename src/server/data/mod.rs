//! Data store repository layer for all domain entities.
//!
//! This module contains repository structs that handle reads and writes against the
//! managed data store for each table the site uses. Repositories work with `entity`
//! row types internally and return domain models to keep the store's row format out
//! of the service layer. Every store request goes through these repositories.

pub mod server_update;
pub mod team_member;
pub mod whitelist_application;

#[cfg(test)]
mod test;
