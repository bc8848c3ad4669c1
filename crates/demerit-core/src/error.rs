//! Error types shared across Demerit crates.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DemeritError>;

#[derive(Debug, Error)]
pub enum DemeritError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Handbook error: {0}")]
    Handbook(String),

    #[error("Gateway error: {0}")]
    Gateway(String),
}
