//! Error Types for the Info Gateway

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InfoError>;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid ISO-8601 timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
