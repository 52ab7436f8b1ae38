use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Public site settings handed to the browser once on load.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SiteConfigDto {
    /// Community Discord invite; empty when none is configured.
    pub invite_url: String,
}
