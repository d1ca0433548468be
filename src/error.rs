use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The transport client could not be initialized while bootstrapping a session.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no token configured (set DISCORD_TOKEN or pass --token)")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, Error>;
