//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `WanderError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `wander-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WanderError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wander-*` crates.
pub type WanderResult<T> = Result<T, WanderError>;
