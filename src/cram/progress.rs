//! The progress tracker: which question ids the user has marked as learned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Question ids marked as mastered. Grows and shrinks only via [`toggle`].
/// Not required to be a subset of the currently filtered view.
///
/// [`toggle`]: MasteredSet::toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasteredSet(BTreeSet<u32>);

impl MasteredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it otherwise. Returns whether the
    /// question is mastered afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Progress against the fixed bank size, never the filtered count.
    /// Clamped to 1.0: a persisted set may hold ids from a larger bank than
    /// the one currently loaded.
    pub fn ratio(&self, total_questions: usize) -> f64 {
        if total_questions == 0 {
            0.0
        } else {
            (self.0.len() as f64 / total_questions as f64).min(1.0)
        }
    }
}
