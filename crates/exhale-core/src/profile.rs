//! User profile: quit instant, consumption settings, subscription tier.
//!
//! The profile is the single input (besides `now`) to every derivation in
//! [`crate::progress`]. Construction and mutation validate the consumption
//! numbers so the calculator can divide by `cigarettes_per_pack` without
//! checking; a stored profile is valid by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProfileError;

/// Subscription level controlling feature visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// Anonymous free usage.
    #[default]
    Free,
    /// Registered account, still unpaid.
    FreeAccount,
    /// Paid subscription.
    Pro,
}

impl SubscriptionTier {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::FreeAccount => "Free account",
            SubscriptionTier::Pro => "Pro",
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(SubscriptionTier::Free),
            "free_account" | "free-account" => Ok(SubscriptionTier::FreeAccount),
            "pro" => Ok(SubscriptionTier::Pro),
            other => Err(format!(
                "unknown tier '{other}' (expected free, free_account, or pro)"
            )),
        }
    }
}

/// User profile for smoke-free tracking.
///
/// Serialized into the `[profile]` section of the config file. A future
/// `quit_at` is accepted here; derivations clamp elapsed time to zero so
/// the display never shows a negative countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Instant the user stopped smoking.
    #[serde(default = "Utc::now")]
    pub quit_at: DateTime<Utc>,
    /// Cigarettes smoked per day before quitting.
    #[serde(default = "default_cigarettes_per_day")]
    pub cigarettes_per_day: u32,
    /// Price of one pack in the user's currency.
    #[serde(default = "default_price_per_pack")]
    pub price_per_pack: f64,
    /// Cigarettes per pack.
    #[serde(default = "default_cigarettes_per_pack")]
    pub cigarettes_per_pack: u32,
    /// Subscription tier; gates feature visibility only.
    #[serde(default)]
    pub tier: SubscriptionTier,
}

fn default_cigarettes_per_day() -> u32 {
    20
}
fn default_price_per_pack() -> f64 {
    10.0
}
fn default_cigarettes_per_pack() -> u32 {
    20
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            quit_at: Utc::now(),
            cigarettes_per_day: default_cigarettes_per_day(),
            price_per_pack: default_price_per_pack(),
            cigarettes_per_pack: default_cigarettes_per_pack(),
            tier: SubscriptionTier::default(),
        }
    }
}

impl UserProfile {
    /// Create a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidProfile`] if any consumption number
    /// is zero or the pack price is not strictly positive.
    pub fn new(
        quit_at: DateTime<Utc>,
        cigarettes_per_day: u32,
        price_per_pack: f64,
        cigarettes_per_pack: u32,
        tier: SubscriptionTier,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            quit_at,
            cigarettes_per_day,
            price_per_pack,
            cigarettes_per_pack,
            tier,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Re-check the configuration invariants.
    ///
    /// Called after deserialization (a hand-edited config file bypasses
    /// [`UserProfile::new`]) and before every settings save.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidProfile`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.cigarettes_per_day == 0 {
            return Err(ProfileError::InvalidProfile {
                field: "cigarettes_per_day",
                value: self.cigarettes_per_day.to_string(),
            });
        }
        if !(self.price_per_pack > 0.0) {
            return Err(ProfileError::InvalidProfile {
                field: "price_per_pack",
                value: self.price_per_pack.to_string(),
            });
        }
        if self.cigarettes_per_pack == 0 {
            return Err(ProfileError::InvalidProfile {
                field: "cigarettes_per_pack",
                value: self.cigarettes_per_pack.to_string(),
            });
        }
        Ok(())
    }

    /// Restart the smoke-free clock (relapse).
    pub fn reset_quit_at(&mut self, now: DateTime<Utc>) {
        self.quit_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quit_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn default_profile_is_valid() {
        let profile = UserProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.cigarettes_per_day, 20);
        assert_eq!(profile.price_per_pack, 10.0);
        assert_eq!(profile.cigarettes_per_pack, 20);
        assert_eq!(profile.tier, SubscriptionTier::Free);
    }

    #[test]
    fn zero_cigarettes_per_pack_is_rejected() {
        let err = UserProfile::new(quit_instant(), 20, 10.0, 0, SubscriptionTier::Free)
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidProfile {
                field: "cigarettes_per_pack",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn zero_cigarettes_per_day_is_rejected() {
        let err = UserProfile::new(quit_instant(), 0, 10.0, 20, SubscriptionTier::Free)
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidProfile {
                field: "cigarettes_per_day",
                ..
            }
        ));
    }

    #[test]
    fn nonpositive_price_is_rejected() {
        for price in [0.0, -1.5, f64::NAN] {
            let result = UserProfile::new(quit_instant(), 20, price, 20, SubscriptionTier::Free);
            assert!(result.is_err(), "price {price} should be rejected");
        }
    }

    #[test]
    fn future_quit_date_is_accepted() {
        let future = Utc::now() + chrono::Duration::days(7);
        let profile = UserProfile::new(future, 20, 10.0, 20, SubscriptionTier::Free);
        assert!(profile.is_ok());
    }

    #[test]
    fn tier_from_str() {
        assert_eq!("free".parse(), Ok(SubscriptionTier::Free));
        assert_eq!("free_account".parse(), Ok(SubscriptionTier::FreeAccount));
        assert_eq!("Pro".parse(), Ok(SubscriptionTier::Pro));
        assert!("platinum".parse::<SubscriptionTier>().is_err());
    }

    #[test]
    fn tier_ordering() {
        assert!(SubscriptionTier::Free < SubscriptionTier::FreeAccount);
        assert!(SubscriptionTier::FreeAccount < SubscriptionTier::Pro);
    }

    #[test]
    fn reset_quit_at_moves_clock() {
        let mut profile = UserProfile::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        profile.reset_quit_at(now);
        assert_eq!(profile.quit_at, now);
    }

    #[test]
    fn profile_toml_roundtrip() {
        let profile = UserProfile::new(quit_instant(), 15, 12.5, 25, SubscriptionTier::Pro)
            .unwrap();
        let toml_str = toml::to_string_pretty(&profile).unwrap();
        let parsed: UserProfile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: UserProfile = toml::from_str("quit_at = \"2025-01-01T00:00:00Z\"").unwrap();
        assert_eq!(parsed.cigarettes_per_day, 20);
        assert_eq!(parsed.cigarettes_per_pack, 20);
        assert_eq!(parsed.tier, SubscriptionTier::Free);
    }
}
