//! Smoke-free progress derivations.
//!
//! Every user-facing statistic is derived here from `(now, profile)` by a
//! pure, total function. The live `now` is always injected by the caller,
//! never read internally, so callers can refresh on any tick and tests can
//! supply fixed instants. Nothing in this module is cached or stored;
//! staleness is impossible by construction.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::milestones::{self, MilestoneStatus};
use crate::profile::UserProfile;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Minutes of life expectancy attributed to each cigarette. A product
/// constant, not derived from the profile.
pub const LIFE_MINUTES_PER_CIGARETTE: i64 = 11;

/// Seconds elapsed since the quit instant, clamped to zero.
///
/// A `quit_at` in the future yields 0 rather than an error or a negative
/// duration, so a pre-scheduled quit date simply shows an unstarted clock.
pub fn elapsed_seconds(now: DateTime<Utc>, quit_at: DateTime<Utc>) -> i64 {
    now.signed_duration_since(quit_at).num_seconds().max(0)
}

/// Format elapsed seconds as `"{days}d {hh}:{mm}:{ss}"`, dropping the day
/// part when it is zero. Sub-units are always modulo their parent unit.
pub fn format_duration(elapsed_seconds: i64) -> String {
    let days = elapsed_seconds / SECONDS_PER_DAY;
    let hours = (elapsed_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (elapsed_seconds % SECONDS_PER_HOUR) / 60;
    let seconds = elapsed_seconds % 60;

    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Whole smoke-free days.
pub fn streak_days(elapsed_seconds: i64) -> i64 {
    elapsed_seconds / SECONDS_PER_DAY
}

/// Money saved, pro-rated continuously across the day.
pub fn money_saved(elapsed_seconds: i64, profile: &UserProfile) -> f64 {
    let days = elapsed_seconds as f64 / SECONDS_PER_DAY as f64;
    days * f64::from(profile.cigarettes_per_day) / f64::from(profile.cigarettes_per_pack)
        * profile.price_per_pack
}

/// Whole cigarettes not smoked since quitting.
pub fn cigarettes_avoided(elapsed_seconds: i64, profile: &UserProfile) -> i64 {
    let days = elapsed_seconds as f64 / SECONDS_PER_DAY as f64;
    (days * f64::from(profile.cigarettes_per_day)).floor() as i64
}

/// Hours of life expectancy regained, at 11 minutes per cigarette.
pub fn life_regained_hours(elapsed_seconds: i64) -> i64 {
    elapsed_seconds / SECONDS_PER_HOUR / LIFE_MINUTES_PER_CIGARETTE
}

/// Every displayed statistic for one `(now, profile)` pair.
///
/// Recomputed on demand; callers that refresh a timer re-invoke
/// [`ProgressSnapshot::at`] each tick rather than mutating a stored copy.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub quit_at: DateTime<Utc>,
    pub elapsed_seconds: i64,
    /// Formatted elapsed duration, e.g. `"1d 01:01:01"`.
    pub duration: String,
    pub streak_days: i64,
    pub money_saved: f64,
    pub cigarettes_avoided: i64,
    pub life_regained_hours: i64,
    pub milestones: Vec<MilestoneStatus>,
    /// Title of and seconds until the first uncompleted milestone.
    pub next_milestone: Option<NextMilestone>,
}

/// The first uncompleted milestone, for the "next goal" line.
#[derive(Debug, Clone, Serialize)]
pub struct NextMilestone {
    pub title: &'static str,
    pub remaining_seconds: i64,
}

impl ProgressSnapshot {
    /// Derive the full snapshot at the given instant.
    pub fn at(now: DateTime<Utc>, profile: &UserProfile) -> Self {
        let elapsed = elapsed_seconds(now, profile.quit_at);
        Self {
            quit_at: profile.quit_at,
            elapsed_seconds: elapsed,
            duration: format_duration(elapsed),
            streak_days: streak_days(elapsed),
            money_saved: money_saved(elapsed, profile),
            cigarettes_avoided: cigarettes_avoided(elapsed, profile),
            life_regained_hours: life_regained_hours(elapsed),
            milestones: milestones::milestone_status(elapsed),
            next_milestone: milestones::next_milestone(elapsed).map(|(m, remaining)| {
                NextMilestone {
                    title: m.title,
                    remaining_seconds: remaining,
                }
            }),
        }
    }
}
