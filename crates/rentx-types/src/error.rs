//! Error types for rentx

use thiserror::Error;

/// HTTP status a request handler reports for a rejected business rule
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Business-rule rejections.
///
/// These are terminal: retrying the same request without changing the
/// underlying data yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("There is a rental in progress for user!")]
    UserHasOpenRental,

    #[error("Car is not available")]
    CarUnavailable,

    #[error("Invalid return time")]
    InvalidReturnTime,

    #[error("Car already exists!")]
    CarAlreadyExists,
}

impl DomainError {
    /// Status code for an HTTP-facing caller
    pub fn status_code(&self) -> u16 {
        UNPROCESSABLE_ENTITY
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// The business-rule rejection behind this error, if any
    pub fn as_domain(&self) -> Option<DomainError> {
        match self {
            Error::Domain(e) => Some(*e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
