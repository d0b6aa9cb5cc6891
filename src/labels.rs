//! The user-defined label set
//!
//! Labels are plain strings with a lifecycle independent of the tasks that carry them:
//! registering a label only makes it selectable when filing a task, and deleting one
//! never rewrites tasks that were already filed under it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The flat, ordered set of labels a user can file tasks under.
/// Unique by exact string match; no hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: BTreeSet<String>,
}

impl LabelSet {
    /// Create an empty label set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label.
    /// Returns `false` (and changes nothing) when the trimmed name is empty
    /// or already registered.
    pub fn add<S: AsRef<str>>(&mut self, name: S) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return false;
        }
        self.labels.insert(name.to_string())
    }

    /// Unregister a label. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.labels.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains(name)
    }

    /// Iterate the registered labels in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
