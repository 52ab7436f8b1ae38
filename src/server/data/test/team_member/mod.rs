use super::store_client;
use crate::server::{data::team_member::TeamMemberRepository, error::AppError};
use axum::http::StatusCode;
use test_utils::{builder::TestBuilder, factory::team_member::TeamMemberFactory};

mod get_all;
