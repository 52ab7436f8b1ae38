//! Row types for the tables of the managed data store.
//!
//! Each module mirrors one table exposed by the store's REST interface. Tables the
//! site reads have a `Model`, the shape of a row as returned by a `select`. The
//! table it writes has a `NewModel`, the shape of the row sent on `insert`, without
//! the columns the store defaults (ids, timestamps, workflow status).

pub mod server_update;
pub mod team_member;
pub mod whitelist_application;
