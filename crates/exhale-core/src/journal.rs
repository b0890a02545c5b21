//! Mood journal: immutable entries held newest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::JournalError;

/// Fixed set of mood tags a journal entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Happy,
    Anxious,
    Stressed,
    Tempted,
    Proud,
}

impl Mood {
    /// Display symbol for terminal output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Calm => "😌",
            Mood::Happy => "😊",
            Mood::Anxious => "😰",
            Mood::Stressed => "😫",
            Mood::Tempted => "🚬",
            Mood::Proud => "💪",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Happy => "Happy",
            Mood::Anxious => "Anxious",
            Mood::Stressed => "Stressed",
            Mood::Tempted => "Tempted",
            Mood::Proud => "Proud",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calm" => Ok(Mood::Calm),
            "happy" => Ok(Mood::Happy),
            "anxious" => Ok(Mood::Anxious),
            "stressed" => Ok(Mood::Stressed),
            "tempted" => Ok(Mood::Tempted),
            "proud" => Ok(Mood::Proud),
            other => Err(format!(
                "unknown mood '{other}' (expected calm, happy, anxious, stressed, tempted, or proud)"
            )),
        }
    }
}

/// A single journal entry, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub mood: Mood,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Optional craving-level rating in 1..=5.
    pub craving: Option<u8>,
}

impl JournalEntry {
    /// Create an entry, validating the craving rating.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::CravingOutOfRange`] when the rating is
    /// outside 1..=5.
    pub fn new(
        created_at: DateTime<Utc>,
        mood: Mood,
        note: Option<String>,
        craving: Option<u8>,
    ) -> Result<Self, JournalError> {
        if let Some(level) = craving {
            if !(1..=5).contains(&level) {
                return Err(JournalError::CravingOutOfRange(level));
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            created_at,
            mood,
            note,
            craving,
        })
    }
}

/// Ordered collection of journal entries, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, keeping newest-first order.
    pub fn add(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }

    /// Delete an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::EntryNotFound`] if no entry has the id.
    pub fn remove(&mut self, id: Uuid) -> Result<JournalEntry, JournalError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(JournalError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Entries newest-first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
