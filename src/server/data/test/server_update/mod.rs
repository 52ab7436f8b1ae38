use super::store_client;
use crate::server::{
    data::server_update::ServerUpdateRepository, error::AppError,
    model::update::GetRecentUpdatesParam,
};
use test_utils::{builder::TestBuilder, factory::server_update::ServerUpdateFactory};

mod get_recent;
