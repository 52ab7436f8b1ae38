pub const SITE_NAME: &str = "County Lines RP";
pub const SITE_TAGLINE: &str = "Serious roleplay across the county lines";

/// When false the whitelist section shows an "opening soon" notice instead of the form.
pub const APPLICATIONS_OPEN: bool = true;
