// File: sift-diff/src/change.rs
// Purpose: Old/new value pairs for changed fields

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Old and new value of a single changed field
///
/// `None` marks a side on which the field was absent. It serializes as
/// `null`, so an absent side and an explicit null look the same on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    #[serde(default)]
    pub old: Option<Value>,
    #[serde(default)]
    pub new: Option<Value>,
}

impl FieldChange {
    pub fn new(old: Option<Value>, new: Option<Value>) -> Self {
        Self { old, new }
    }

    /// The field did not exist in the source record
    pub fn is_addition(&self) -> bool {
        self.old.is_none() && self.new.is_some()
    }
}

/// Changed fields keyed by name
///
/// Only fields whose values differ are present. Fields added in the target
/// come first, in target order, followed by modified fields in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeRecord {
    changes: IndexMap<String, FieldChange>,
}

impl ChangeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, change: FieldChange) {
        self.changes.insert(field.into(), change);
    }

    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.changes.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.changes.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Names of the changed fields in record order
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.changes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldChange> {
        self.changes.iter()
    }
}

impl IntoIterator for ChangeRecord {
    type Item = (String, FieldChange);
    type IntoIter = indexmap::map::IntoIter<String, FieldChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeRecord {
    type Item = (&'a String, &'a FieldChange);
    type IntoIter = indexmap::map::Iter<'a, String, FieldChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl FromIterator<(String, FieldChange)> for ChangeRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldChange)>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
