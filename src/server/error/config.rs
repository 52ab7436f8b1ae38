use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds a value that is not an absolute URL.
    #[error("Environment variable {name} must be an http(s) URL, got '{value}'")]
    UnsupportedUrl { name: String, value: String },

    #[error("Environment variable {name} is not a valid URL '{value}': {source}")]
    InvalidUrl {
        name: String,
        value: String,
        #[source]
        source: url::ParseError,
    },
}
