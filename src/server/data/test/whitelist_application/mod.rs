use super::store_client;
use crate::server::{
    data::whitelist_application::WhitelistApplicationRepository, error::AppError,
    model::application::CreateApplicationParam,
};
use axum::http::StatusCode;
use test_utils::builder::TestBuilder;

mod create;

fn param() -> CreateApplicationParam {
    CreateApplicationParam {
        discord_username: "rizzo".to_string(),
        in_game_name: "Tony Rizzo".to_string(),
        age: 27,
        timezone: "GMT/BST".to_string(),
        experience: "Ran a gang on another server".to_string(),
        character_story: "Left Manchester in a hurry.\nNow lying low.".to_string(),
        why_join: "Serious RP only".to_string(),
    }
}
