//! Whitelist application factory for creating insert payloads.

use entity::whitelist_application::NewModel;

use crate::factory::helpers::next_id;

/// Creates a complete, agreed application with unique applicant names.
pub fn create_application() -> NewModel {
    let id = next_id();
    NewModel {
        discord_username: format!("applicant{}", id),
        in_game_name: format!("Applicant {}", id),
        age: 21,
        timezone: "GMT/BST".to_string(),
        experience: "Some serious RP experience".to_string(),
        character_story: "Born in Peckham.\nWorks nights.".to_string(),
        why_join: "Heard good things".to_string(),
        rules_agreed: true,
    }
}
