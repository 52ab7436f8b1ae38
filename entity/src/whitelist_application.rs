use serde::{Deserialize, Serialize};

pub const TABLE: &str = "whitelist_applications";

/// Applicant-supplied columns of a new application row.
///
/// Applications are write-only from this site. The store fills in `id`, the
/// pending `status` and `submitted_at`; review columns belong to staff tooling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub discord_username: String,
    pub in_game_name: String,
    pub age: i32,
    pub timezone: String,
    pub experience: String,
    pub character_story: String,
    pub why_join: String,
    pub rules_agreed: bool,
}
