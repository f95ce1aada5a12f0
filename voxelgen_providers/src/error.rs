use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Missing API credentials: {0}")]
    Credentials(String),
}
