// File: sift-diff/src/error.rs
// Purpose: Errors raised when a value cannot be viewed as a record

use thiserror::Error;

/// Failure to read a value as a record
///
/// Diffing itself never fails. These only surface when an input breaks the
/// caller precondition of being record-shaped.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The value is a scalar or array rather than a set of named fields
    #[error("expected a record-shaped value, found {found}")]
    NotARecord { found: &'static str },

    /// A field's value could not be converted for comparison
    #[error("failed to read field `{field}`")]
    Field {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}
