//! Tier-based feature gating.
//!
//! Gating lives in one pure function consulted by every surface, instead
//! of equality checks scattered through the display code.

use serde::{Deserialize, Serialize};

use crate::profile::SubscriptionTier;

/// Gated application features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Elapsed time, money saved, and milestone statistics.
    ProgressDashboard,
    /// The mood journal.
    MoodJournal,
    /// Community feed of other quitters.
    CommunityFeed,
    /// AI quit coach.
    AiCoach,
    /// One-tap craving emergency support.
    EmergencyButton,
}

impl Feature {
    /// Every gated feature, in display order.
    pub const ALL: &'static [Feature] = &[
        Feature::ProgressDashboard,
        Feature::MoodJournal,
        Feature::CommunityFeed,
        Feature::AiCoach,
        Feature::EmergencyButton,
    ];

    /// Minimum tier required to use this feature.
    pub fn required_tier(&self) -> SubscriptionTier {
        match self {
            Feature::ProgressDashboard | Feature::MoodJournal => SubscriptionTier::Free,
            Feature::CommunityFeed => SubscriptionTier::FreeAccount,
            Feature::AiCoach | Feature::EmergencyButton => SubscriptionTier::Pro,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ProgressDashboard => "Progress dashboard",
            Feature::MoodJournal => "Mood journal",
            Feature::CommunityFeed => "Community feed",
            Feature::AiCoach => "AI coach",
            Feature::EmergencyButton => "Emergency button",
        }
    }
}

/// Whether the given tier may use the given feature.
pub fn can_access(tier: SubscriptionTier, feature: Feature) -> bool {
    tier >= feature.required_tier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_gets_core_features_only() {
        assert!(can_access(SubscriptionTier::Free, Feature::ProgressDashboard));
        assert!(can_access(SubscriptionTier::Free, Feature::MoodJournal));
        assert!(!can_access(SubscriptionTier::Free, Feature::CommunityFeed));
        assert!(!can_access(SubscriptionTier::Free, Feature::AiCoach));
        assert!(!can_access(SubscriptionTier::Free, Feature::EmergencyButton));
    }

    #[test]
    fn free_account_unlocks_community() {
        assert!(can_access(SubscriptionTier::FreeAccount, Feature::CommunityFeed));
        assert!(!can_access(SubscriptionTier::FreeAccount, Feature::AiCoach));
    }

    #[test]
    fn pro_gets_everything() {
        for feature in Feature::ALL {
            assert!(can_access(SubscriptionTier::Pro, *feature));
        }
    }

    #[test]
    fn higher_tiers_never_lose_access() {
        for feature in Feature::ALL {
            if can_access(SubscriptionTier::Free, *feature) {
                assert!(can_access(SubscriptionTier::FreeAccount, *feature));
            }
            if can_access(SubscriptionTier::FreeAccount, *feature) {
                assert!(can_access(SubscriptionTier::Pro, *feature));
            }
        }
    }
}
