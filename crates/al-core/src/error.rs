//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `AlError` as one variant
//! where they need to surface core failures.

use thiserror::Error;

/// The top-level error type for `al-core`.
#[derive(Debug, Error)]
pub enum AlError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `al-*` crates.
pub type AlResult<T> = Result<T, AlError>;
