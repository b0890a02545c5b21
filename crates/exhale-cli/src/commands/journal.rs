use chrono::Utc;
use clap::Subcommand;
use exhale_core::journal::{Journal, JournalEntry, Mood};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Record a mood entry
    Add {
        /// Mood tag (calm, happy, anxious, stressed, tempted, proud)
        mood: Mood,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,

        /// Craving level, 1 (mild) to 5 (intense)
        #[arg(long)]
        craving: Option<u8>,
    },

    /// List entries, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an entry by id
    Delete { id: Uuid },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        JournalAction::Add { mood, note, craving } => add(mood, note, craving),
        JournalAction::List { json } => list(json),
        JournalAction::Delete { id } => delete(id),
    }
}

fn add(mood: Mood, note: Option<String>, craving: Option<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let entry = JournalEntry::new(Utc::now(), mood, note, craving)?;
    let id = entry.id;

    let mut journal = Journal::load()?;
    journal.add(entry);
    journal.save()?;

    println!("Entry recorded: {id}");
    Ok(())
}

fn list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let journal = Journal::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(journal.entries())?);
        return Ok(());
    }

    if journal.is_empty() {
        println!("No journal entries yet. Use 'journal add <mood>' to record one.");
        return Ok(());
    }

    for entry in journal.entries() {
        let craving = entry
            .craving
            .map(|level| format!("  craving {level}/5"))
            .unwrap_or_default();
        println!(
            "{}  {} {}{}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.mood.symbol(),
            entry.mood.label(),
            craving
        );
        if let Some(ref note) = entry.note {
            println!("    {note}");
        }
        println!("    id: {}", entry.id);
    }

    Ok(())
}

fn delete(id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let mut journal = Journal::load()?;
    journal.remove(id)?;
    journal.save()?;
    println!("Entry deleted: {id}");
    Ok(())
}
