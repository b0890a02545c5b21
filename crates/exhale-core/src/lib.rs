//! # Exhale Core Library
//!
//! This library provides the core business logic for Exhale, a smoke-free
//! progress tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! expected to be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Progress engine**: pure, total derivations over `(now, profile)`;
//!   the caller injects `now` and re-derives on every tick
//! - **Storage**: TOML-based configuration and a JSON journal file
//! - **Journal**: immutable mood entries held newest-first
//! - **Access**: tier-based feature gating as one pure function
//!
//! ## Key Components
//!
//! - [`ProgressSnapshot`]: every displayed statistic for one instant
//! - [`UserProfile`]: validated quit/consumption settings
//! - [`Journal`]: the mood journal
//! - [`Config`]: application configuration management

pub mod access;
pub mod error;
pub mod journal;
pub mod milestones;
pub mod profile;
pub mod progress;
pub mod storage;

pub use access::{can_access, Feature};
pub use error::{ConfigError, CoreError, JournalError, ProfileError};
pub use journal::{Journal, JournalEntry, Mood};
pub use milestones::{HealthMilestone, MilestoneStatus, MILESTONES};
pub use profile::{SubscriptionTier, UserProfile};
pub use progress::ProgressSnapshot;
pub use storage::{data_dir, Config, DisplayConfig};
