use crate::domain::{Field, ProductId};
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Depot error types
///
/// Rule violations on a candidate product are not errors; they are returned
/// as `ValidationErrors`. This type covers operational failures, plus the
/// refusal of a store to persist an invalid record.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Validation failed: {0}")]
    RecordInvalid(ValidationErrors),

    #[error("Invalid input: {field}")]
    InvalidInput { field: Field },

    #[error("Not found: product {id}")]
    NotFound { id: ProductId },

    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),
}

impl Error {
    pub fn invalid_input(field: Field) -> Self {
        Self::InvalidInput { field }
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound { id }
    }

    /// Validation errors carried by a `RecordInvalid`
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::RecordInvalid(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
