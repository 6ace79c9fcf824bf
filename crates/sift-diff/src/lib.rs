// File: sift-diff/src/lib.rs
// Purpose: Main entry point for sift-diff library

//! # sift-diff
//!
//! Shallow, field-level change detection between two snapshots of the same
//! record, typically taken before and after an update for an audit log.
//!
//! ## Quick Start
//!
//! ```
//! use serde::Serialize;
//! use serde_json::json;
//! use sift_diff::{diff, Diffable};
//!
//! #[derive(Serialize, Diffable)]
//! struct Data {
//!     id: String,
//!     name: Option<String>,
//!     count: u32,
//! }
//!
//! let before = Data { id: "1".into(), name: None, count: 0 };
//! let after = Data { id: "1".into(), name: Some("khan".into()), count: 1 };
//!
//! let changes = diff(&before, &after)?;
//! assert_eq!(changes.fields().collect::<Vec<_>>(), vec!["name", "count"]);
//! assert_eq!(changes.get("name").unwrap().old, None);
//! assert_eq!(changes.get("count").unwrap().new, Some(json!(1)));
//! # Ok::<(), sift_diff::DiffError>(())
//! ```
//!
//! ## Semantics
//!
//! - Fields present in the target but absent from the source are reported
//!   with `old: None`
//! - Fields present on both sides are reported when their values differ
//! - Fields present in the source but absent from the target are **not**
//!   reported
//! - Comparison is one level deep, see [`Equality`]

pub mod change;
pub mod equality;
pub mod error;
mod finite;
pub mod record;

// Re-export main types
pub use change::{ChangeRecord, FieldChange};
pub use equality::{DiffOptions, Equality};
pub use error::DiffError;
pub use record::{field_value, Diffable, Record};

#[cfg(feature = "derive")]
pub use sift_macro::Diffable;

/// Diffs two records with strict equality
///
/// Passing the same reference twice always yields an empty record.
pub fn diff<T: Diffable + ?Sized>(source: &T, target: &T) -> Result<ChangeRecord, DiffError> {
    diff_with(source, target, &DiffOptions::default())
}

/// Diffs two records with the given options
pub fn diff_with<T: Diffable + ?Sized>(
    source: &T,
    target: &T,
    options: &DiffOptions,
) -> Result<ChangeRecord, DiffError> {
    let source_record = source.to_record()?;

    if std::ptr::eq(source, target) {
        tracing::trace!("source and target are the same value");
        return Ok(ChangeRecord::new());
    }

    let target_record = target.to_record()?;
    Ok(diff_records(&source_record, &target_record, options))
}

/// Diffs two field snapshots
///
/// Walks the target for fields the source lacks, then the source for fields
/// both hold with different values.
pub fn diff_records(source: &Record, target: &Record, options: &DiffOptions) -> ChangeRecord {
    let mut changes = ChangeRecord::new();

    if std::ptr::eq(source, target) {
        return changes;
    }

    for (field, new) in target {
        if !(source.contains_key(field) && target.contains_key(field)) {
            changes.insert(
                field.clone(),
                FieldChange::new(source.get(field).cloned(), Some(new.clone())),
            );
        }
    }

    for (field, old) in source {
        if let Some(new) = target.get(field) {
            if !options.equality.same(old, new) {
                changes.insert(
                    field.clone(),
                    FieldChange::new(Some(old.clone()), Some(new.clone())),
                );
            }
        }
    }

    tracing::debug!(
        changed = changes.len(),
        source_fields = source.len(),
        target_fields = target.len(),
        equality = ?options.equality,
        "diffed records"
    );

    changes
}
