//! # Durable storage
//!
//! The [`DataStore`] trait abstracts the two things cram persists across
//! sessions: the user's preferences and the mastered-question set. The
//! question bank itself is never written — it is a read-only asset.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage under the platform data directory
//!   - Preferences in `prefs.json`
//!   - Mastered ids in `mastered.json` (a plain JSON array)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing, plus a
//!   failing variant to exercise silent degradation
//!
//! ## Failure policy
//!
//! Storage is never allowed to interrupt a study session. Callers load with
//! `unwrap_or_default()` semantics (a missing or unreadable file yields the
//! defaults) and treat writes as fire-and-forget. Reads happen once at
//! startup; writes happen synchronously on each toggle, so last-write-wins
//! is sufficient.

use crate::error::Result;
use crate::progress::MasteredSet;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// User preferences, persisted independently of session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Absent from storage means light mode.
    #[serde(default)]
    pub dark_mode: bool,
}

/// Abstract interface for the persisted slices of application state.
pub trait DataStore {
    /// Load preferences, falling back to defaults when nothing is stored.
    fn load_prefs(&self) -> Result<Preferences>;

    /// Persist preferences (called on every change).
    fn save_prefs(&mut self, prefs: &Preferences) -> Result<()>;

    /// Load the mastered set, falling back to empty when nothing is stored.
    fn load_mastered(&self) -> Result<MasteredSet>;

    /// Persist the mastered set (called on every toggle).
    fn save_mastered(&mut self, mastered: &MasteredSet) -> Result<()>;
}
