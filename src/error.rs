use thiserror::Error;

/// Errors that can occur while talking to the cocktail catalog
#[derive(Error, Debug)]
pub enum ThirstyError {
    /// Failed to fetch from the catalog API
    #[error("Failed to fetch drinks: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The lookup succeeded but returned no drink for this id
    #[error("Drink not found: {0}")]
    DrinkNotFound(String),

    /// Response body was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Search term or drink id was unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
