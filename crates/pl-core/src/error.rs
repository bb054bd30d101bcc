use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlError {
    #[error("an API key is required; set PEOPLELENS_API_KEY")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("upstream API returned status {status}")]
    Upstream { status: u16 },
    #[error("http error: {0}")]
    Http(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlError>;
