//! Static health-milestone reference data.
//!
//! A fixed ordered sequence of elapsed-time thresholds, each associated
//! with a claimed health-recovery event. Completion is always derived from
//! elapsed time, never stored.

use serde::Serialize;

use crate::progress::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

const SECONDS_PER_MINUTE: i64 = 60;

/// A fixed elapsed-time threshold with its health-recovery claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthMilestone {
    /// Elapsed smoke-free seconds required.
    pub threshold_seconds: i64,
    /// Short title, e.g. "20 minutes".
    pub title: &'static str,
    /// The recovery event claimed at this threshold.
    pub description: &'static str,
}

/// The milestone timeline, ordered by ascending threshold.
pub const MILESTONES: &[HealthMilestone] = &[
    HealthMilestone {
        threshold_seconds: 20 * SECONDS_PER_MINUTE,
        title: "20 minutes",
        description: "Heart rate and blood pressure drop back toward normal",
    },
    HealthMilestone {
        threshold_seconds: 8 * SECONDS_PER_HOUR,
        title: "8 hours",
        description: "Carbon monoxide level in the blood falls by half",
    },
    HealthMilestone {
        threshold_seconds: SECONDS_PER_DAY,
        title: "24 hours",
        description: "Risk of heart attack begins to decrease",
    },
    HealthMilestone {
        threshold_seconds: 2 * SECONDS_PER_DAY,
        title: "48 hours",
        description: "Nerve endings regrow; smell and taste sharpen",
    },
    HealthMilestone {
        threshold_seconds: 3 * SECONDS_PER_DAY,
        title: "72 hours",
        description: "Bronchial tubes relax and breathing feels easier",
    },
    HealthMilestone {
        threshold_seconds: 14 * SECONDS_PER_DAY,
        title: "2 weeks",
        description: "Circulation improves and walking gets easier",
    },
    HealthMilestone {
        threshold_seconds: 30 * SECONDS_PER_DAY,
        title: "1 month",
        description: "Lung function starts to recover; coughing decreases",
    },
    HealthMilestone {
        threshold_seconds: 90 * SECONDS_PER_DAY,
        title: "3 months",
        description: "Lung capacity can improve by up to 30 percent",
    },
    HealthMilestone {
        threshold_seconds: 270 * SECONDS_PER_DAY,
        title: "9 months",
        description: "Cilia regrow; sinus congestion and fatigue decline",
    },
    HealthMilestone {
        threshold_seconds: 365 * SECONDS_PER_DAY,
        title: "1 year",
        description: "Risk of coronary heart disease is cut in half",
    },
];

/// A milestone paired with its derived completion state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MilestoneStatus {
    #[serde(flatten)]
    pub milestone: HealthMilestone,
    /// Strictly greater: a milestone completes one second after its
    /// threshold, never at it.
    pub completed: bool,
}

/// Derive completion for each milestone in the list at the given elapsed
/// time, preserving order.
pub fn milestone_status_in(
    milestones: &[HealthMilestone],
    elapsed_seconds: i64,
) -> Vec<MilestoneStatus> {
    milestones
        .iter()
        .map(|m| MilestoneStatus {
            milestone: *m,
            completed: elapsed_seconds > m.threshold_seconds,
        })
        .collect()
}

/// Derive completion for the standard timeline ([`MILESTONES`]).
pub fn milestone_status(elapsed_seconds: i64) -> Vec<MilestoneStatus> {
    milestone_status_in(MILESTONES, elapsed_seconds)
}

/// The first milestone not yet completed, with seconds remaining until it.
///
/// Returns `None` once the whole timeline is complete.
pub fn next_milestone(elapsed_seconds: i64) -> Option<(&'static HealthMilestone, i64)> {
    MILESTONES
        .iter()
        .find(|m| elapsed_seconds <= m.threshold_seconds)
        .map(|m| (m, m.threshold_seconds - elapsed_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_are_strictly_ascending() {
        for pair in MILESTONES.windows(2) {
            assert!(
                pair[0].threshold_seconds < pair[1].threshold_seconds,
                "{} must come before {}",
                pair[0].title,
                pair[1].title
            );
        }
    }

    #[test]
    fn twenty_minute_milestone_uses_strict_inequality() {
        // At exactly the threshold the milestone is NOT completed.
        let at_threshold = milestone_status(1200);
        assert!(!at_threshold[0].completed);

        let one_past = milestone_status(1201);
        assert!(one_past[0].completed);
    }

    #[test]
    fn zero_elapsed_completes_nothing() {
        assert!(milestone_status(0).iter().all(|s| !s.completed));
    }

    #[test]
    fn full_year_completes_everything() {
        let statuses = milestone_status(366 * SECONDS_PER_DAY);
        assert!(statuses.iter().all(|s| s.completed));
        assert!(next_milestone(366 * SECONDS_PER_DAY).is_none());
    }

    #[test]
    fn next_milestone_reports_remaining_seconds() {
        let (m, remaining) = next_milestone(1000).unwrap();
        assert_eq!(m.title, "20 minutes");
        assert_eq!(remaining, 200);

        // At exactly the threshold the 20-minute milestone is still next.
        let (m, remaining) = next_milestone(1200).unwrap();
        assert_eq!(m.title, "20 minutes");
        assert_eq!(remaining, 0);

        let (m, _) = next_milestone(1201).unwrap();
        assert_eq!(m.title, "8 hours");
    }

    #[test]
    fn custom_milestone_list_is_respected() {
        let custom = [HealthMilestone {
            threshold_seconds: 10,
            title: "10 seconds",
            description: "Clock is running",
        }];
        let statuses = milestone_status_in(&custom, 11);
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].completed);
    }

    #[test]
    fn status_order_matches_table_order() {
        let statuses = milestone_status(0);
        assert_eq!(statuses.len(), MILESTONES.len());
        for (status, milestone) in statuses.iter().zip(MILESTONES) {
            assert_eq!(status.milestone.title, milestone.title);
        }
    }
}
