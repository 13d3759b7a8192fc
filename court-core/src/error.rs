#[derive(Debug, thiserror::Error)]
pub enum CourtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation service error: {0}")]
    Service(String),

    #[error("Deployment error: {0}")]
    Deployment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CourtError>;
