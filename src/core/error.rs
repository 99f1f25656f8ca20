use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarseedError {
    #[error("Invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid generation limits: {0}")]
    InvalidLimits(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StarseedError>;
