//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `mapf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Shorthand result type for `mapf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
