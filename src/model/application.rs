//! Whitelist application form state and submission payload.
//!
//! `ApplicationFormState` drives the form through
//! `Idle -> Submitting -> Success | Error`. Submission is split in two halves so the
//! async insert can happen in between:
//!
//! - `begin_submit` validates the fields and either hands back the payload to send
//!   (moving to `Submitting`) or moves straight to `Error` without a payload.
//! - `finish_submit` takes the outcome of the insert and moves to `Success` (fields
//!   cleared) or `Error` (fields kept for a retry).

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Lowest age accepted by the form.
pub const MINIMUM_AGE: i32 = 16;

pub const RULES_NOT_AGREED_MESSAGE: &str = "You must agree to the server rules to continue";
pub const INVALID_AGE_MESSAGE: &str = "Please enter your age as a whole number";
pub const UNDER_AGE_MESSAGE: &str = "You must be at least 16 years old to apply";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit application. Please try again.";

/// Payload of `POST /api/applications`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateApplicationDto {
    pub discord_username: String,
    pub in_game_name: String,
    pub age: i32,
    pub timezone: String,
    pub experience: String,
    pub character_story: String,
    pub why_join: String,
    pub rules_agreed: bool,
}

/// Raw field values as typed by the applicant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub discord_username: String,
    pub in_game_name: String,
    /// Kept as text until submission; see `ApplicationForm::to_submission`.
    pub age: String,
    pub timezone: String,
    pub experience: String,
    pub character_story: String,
    pub why_join: String,
    pub rules_agreed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    RulesNotAgreed,
    InvalidAge,
    UnderAge,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::RulesNotAgreed => RULES_NOT_AGREED_MESSAGE,
            Self::InvalidAge => INVALID_AGE_MESSAGE,
            Self::UnderAge => UNDER_AGE_MESSAGE,
        };
        f.write_str(message)
    }
}

impl ApplicationForm {
    /// Builds the insert payload from the current field values.
    ///
    /// The agreement checkbox is checked first. Age must parse as a whole number
    /// (surrounding whitespace ignored) and be at least [`MINIMUM_AGE`].
    pub fn to_submission(&self) -> Result<CreateApplicationDto, FormError> {
        if !self.rules_agreed {
            return Err(FormError::RulesNotAgreed);
        }

        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidAge)?;
        if age < MINIMUM_AGE {
            return Err(FormError::UnderAge);
        }

        Ok(CreateApplicationDto {
            discord_username: self.discord_username.clone(),
            in_game_name: self.in_game_name.clone(),
            age,
            timezone: self.timezone.clone(),
            experience: self.experience.clone(),
            character_story: self.character_story.clone(),
            why_join: self.why_join.clone(),
            rules_agreed: self.rules_agreed,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Message shown in the inline error notice.
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationFormState {
    pub form: ApplicationForm,
    pub status: SubmissionStatus,
}

impl ApplicationFormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    /// Starts a submission.
    ///
    /// Returns the payload to insert when the form is valid. Returns `None`, and
    /// sends nothing, when a submission is already in flight or validation fails;
    /// in the latter case the state moves to `Error` with the validation message.
    pub fn begin_submit(&mut self) -> Option<CreateApplicationDto> {
        if self.is_submitting() {
            return None;
        }

        match self.form.to_submission() {
            Ok(dto) => {
                self.status = SubmissionStatus::Submitting;
                Some(dto)
            }
            Err(err) => {
                self.status = SubmissionStatus::Error(err.to_string());
                None
            }
        }
    }

    /// Applies the outcome of the insert started by `begin_submit`.
    ///
    /// The store's error is not shown to the applicant; any failure results in the
    /// same generic message.
    pub fn finish_submit<E>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.form = ApplicationForm::default();
                self.status = SubmissionStatus::Success;
            }
            Err(_) => {
                self.status = SubmissionStatus::Error(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
    }
}
