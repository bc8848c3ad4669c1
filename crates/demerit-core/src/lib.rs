//! # Demerit Core
//!
//! Shared foundation for the Demerit school disciplinary backend:
//! configuration loading and the crate-wide error type.

pub mod config;
pub mod error;

pub use config::DemeritConfig;
pub use error::{DemeritError, Result};
