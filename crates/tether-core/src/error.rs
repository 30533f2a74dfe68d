//! Error types for Tether

use thiserror::Error;

/// Failure to obtain a seed from a secure random source.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The entropy source is exhausted or unreadable.
    #[error("Random source unavailable: {0}")]
    RandomSource(String),
}

/// Main error type for Tether operations
#[derive(Debug, Error)]
pub enum TetherError {
    /// Seed generation failed
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Error in shuffle configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Tether operations
pub type Result<T> = std::result::Result<T, TetherError>;
