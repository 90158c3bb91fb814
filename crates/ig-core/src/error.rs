//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::FeatureId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("feature {0} not found")]
    FeatureNotFound(FeatureId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ig-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
