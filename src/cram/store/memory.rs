use super::{DataStore, Preferences};
use crate::error::{CramError, Result};
use crate::progress::MasteredSet;

/// In-memory store for tests. No persistence across instances.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    prefs: Preferences,
    mastered: MasteredSet,
    /// When set, every operation fails, for exercising silent degradation.
    fail: bool,
    pub prefs_writes: usize,
    pub mastered_writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(CramError::Store("storage unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl DataStore for InMemoryStore {
    fn load_prefs(&self) -> Result<Preferences> {
        self.check()?;
        Ok(self.prefs)
    }

    fn save_prefs(&mut self, prefs: &Preferences) -> Result<()> {
        self.check()?;
        self.prefs = *prefs;
        self.prefs_writes += 1;
        Ok(())
    }

    fn load_mastered(&self) -> Result<MasteredSet> {
        self.check()?;
        Ok(self.mastered.clone())
    }

    fn save_mastered(&mut self, mastered: &MasteredSet) -> Result<()> {
        self.check()?;
        self.mastered = mastered.clone();
        self.mastered_writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_prefs_and_mastered() {
        let mut store = InMemoryStore::new();
        store.save_prefs(&Preferences { dark_mode: true }).unwrap();

        let mut mastered = MasteredSet::new();
        mastered.toggle(9);
        store.save_mastered(&mastered).unwrap();

        assert!(store.load_prefs().unwrap().dark_mode);
        assert!(store.load_mastered().unwrap().contains(9));
        assert_eq!(store.prefs_writes, 1);
        assert_eq!(store.mastered_writes, 1);
    }

    #[test]
    fn failing_store_errors_on_every_operation() {
        let mut store = InMemoryStore::failing();
        assert!(store.load_prefs().is_err());
        assert!(store.save_prefs(&Preferences::default()).is_err());
        assert!(store.load_mastered().is_err());
        assert!(store.save_mastered(&MasteredSet::new()).is_err());
    }
}
