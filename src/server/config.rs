use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Base URL of the managed data store.
const STORE_URL_VAR: &str = "SUPABASE_URL";
/// API key sent with every data store request.
const STORE_API_KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Community Discord invite used by every "Join Discord" link.
const DISCORD_INVITE_VAR: &str = "DISCORD_INVITE";

pub struct Config {
    pub store_url: Url,
    pub store_api_key: String,

    pub discord_invite_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as missing. The invite link is optional and is passed
    /// through unvalidated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let raw_url = required(STORE_URL_VAR)?;
        let store_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            name: STORE_URL_VAR.to_string(),
            value: raw_url.clone(),
            source,
        })?;
        // "host:port" without a scheme parses with the host as scheme
        if store_url.cannot_be_a_base() || !matches!(store_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedUrl {
                name: STORE_URL_VAR.to_string(),
                value: raw_url,
            }
            .into());
        }

        Ok(Self {
            store_url,
            store_api_key: required(STORE_API_KEY_VAR)?,
            discord_invite_url: lookup(DISCORD_INVITE_VAR).unwrap_or_default(),
        })
    }
}
