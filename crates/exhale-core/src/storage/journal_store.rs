//! JSON persistence for the mood journal.
//!
//! The journal lives at `<data_dir>/journal.json`. A missing file is an
//! empty journal, not an error.

use std::path::Path;

use super::data_dir;
use crate::error::CoreError;
use crate::journal::Journal;

impl Journal {
    /// Load the journal from the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, CoreError> {
        let path = data_dir()?.join("journal.json");
        Self::load_from(&path)
    }

    /// Persist the journal to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = data_dir()?.join("journal.json");
        self.save_to(&path)
    }

    fn load_from(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Journal::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{JournalEntry, Mood};
    use chrono::Utc;

    #[test]
    fn missing_file_is_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::load_from(&dir.path().join("journal.json")).unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn save_then_load_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut journal = Journal::new();
        journal.add(
            JournalEntry::new(Utc::now(), Mood::Tempted, Some("after coffee".into()), Some(4))
                .unwrap(),
        );
        journal.add(JournalEntry::new(Utc::now(), Mood::Proud, None, None).unwrap());
        journal.save_to(&path).unwrap();

        let loaded = Journal::load_from(&path).unwrap();
        assert_eq!(loaded.entries(), journal.entries());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Journal::load_from(&path).is_err());
    }
}
