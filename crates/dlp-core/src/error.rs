//! Error type for record construction.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Schema;

/// Errors raised when a record or record set would break the shared-schema
/// invariant.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record has {found} values but schema has {expected} fields")]
    Arity { expected: usize, found: usize },

    #[error("record schema {found} does not match set schema {expected}")]
    SchemaMismatch { expected: Schema, found: Schema },

    #[error("duplicate field name {0:?}")]
    DuplicateField(String),
}

/// Shorthand result type for `dlp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
