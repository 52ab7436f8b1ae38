//! Whitelist application domain models and parameters.

use crate::{
    model::application::{CreateApplicationDto, MINIMUM_AGE},
    server::error::AppError,
};

/// Parameters for submitting a new whitelist application.
///
/// Holds only applicant-supplied fields. The store assigns the id, the pending
/// workflow status and the submission timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateApplicationParam {
    pub discord_username: String,
    pub in_game_name: String,
    pub age: i32,
    pub timezone: String,
    pub experience: String,
    pub character_story: String,
    pub why_join: String,
}

impl CreateApplicationParam {
    /// Converts the request DTO, re-checking the rules the form enforces.
    ///
    /// # Returns
    /// - `Ok(CreateApplicationParam)` - Applicant agreed to the rules and is old enough
    /// - `Err(AppError::BadRequest)` - Rules not agreed, or age below the minimum
    pub fn from_dto(dto: CreateApplicationDto) -> Result<Self, AppError> {
        if !dto.rules_agreed {
            return Err(AppError::BadRequest(
                "Applicants must agree to the server rules".to_string(),
            ));
        }
        if dto.age < MINIMUM_AGE {
            return Err(AppError::BadRequest(format!(
                "Applicants must be at least {} years old",
                MINIMUM_AGE
            )));
        }

        Ok(Self {
            discord_username: dto.discord_username,
            in_game_name: dto.in_game_name,
            age: dto.age,
            timezone: dto.timezone,
            experience: dto.experience,
            character_story: dto.character_story,
            why_join: dto.why_join,
        })
    }

    /// Converts the parameters into the row sent to the store.
    pub fn into_entity(self) -> entity::whitelist_application::NewModel {
        entity::whitelist_application::NewModel {
            discord_username: self.discord_username,
            in_game_name: self.in_game_name,
            age: self.age,
            timezone: self.timezone,
            experience: self.experience,
            character_story: self.character_story,
            why_join: self.why_join,
            rules_agreed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateApplicationDto {
        CreateApplicationDto {
            discord_username: "mags".to_string(),
            in_game_name: "Maggie Cole".to_string(),
            age: 24,
            timezone: "GMT".to_string(),
            experience: "Lots".to_string(),
            character_story: "Former paramedic.".to_string(),
            why_join: "Friends play here".to_string(),
            rules_agreed: true,
        }
    }

    /// Tests converting a valid request into an insert row.
    #[test]
    fn converts_valid_request() {
        let row = CreateApplicationParam::from_dto(dto()).unwrap().into_entity();

        assert_eq!(row.discord_username, "mags");
        assert_eq!(row.age, 24);
        assert!(row.rules_agreed);
    }

    /// Tests that a request without agreement is refused.
    #[test]
    fn refuses_missing_agreement() {
        let result = CreateApplicationParam::from_dto(CreateApplicationDto {
            rules_agreed: false,
            ..dto()
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that an underage request is refused.
    #[test]
    fn refuses_underage_applicant() {
        let result = CreateApplicationParam::from_dto(CreateApplicationDto { age: 15, ..dto() });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
