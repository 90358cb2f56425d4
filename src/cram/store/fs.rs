use super::{DataStore, Preferences};
use crate::error::{CramError, Result};
use crate::progress::MasteredSet;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";
const MASTERED_FILENAME: &str = "mastered.json";

/// File-backed store rooted at a single directory (the platform data dir in
/// production, a temp dir in tests).
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_json<T: DeserializeOwned + Default>(&self, filename: &str) -> Result<T> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(CramError::Io)?;
        let value = serde_json::from_str(&content).map_err(CramError::Serialization)?;
        Ok(value)
    }

    fn save_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CramError::Io)?;
        }
        let content = serde_json::to_string_pretty(value).map_err(CramError::Serialization)?;
        fs::write(self.root.join(filename), content).map_err(CramError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_prefs(&self) -> Result<Preferences> {
        self.load_json(PREFS_FILENAME)
    }

    fn save_prefs(&mut self, prefs: &Preferences) -> Result<()> {
        self.save_json(PREFS_FILENAME, prefs)
    }

    fn load_mastered(&self) -> Result<MasteredSet> {
        self.load_json(MASTERED_FILENAME)
    }

    fn save_mastered(&mut self, mastered: &MasteredSet) -> Result<()> {
        self.save_json(MASTERED_FILENAME, mastered)
    }
}
