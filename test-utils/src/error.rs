use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the fake store's listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize a seeded row.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
