//! Profile and settings commands.
//!
//! The settings/onboarding surface: constructs and updates the validated
//! user profile. Invalid values are rejected before anything is saved.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;
use exhale_core::profile::SubscriptionTier;
use exhale_core::storage::Config;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile
    Show,

    /// Update profile settings
    Set {
        /// Quit instant (RFC 3339, or YYYY-MM-DD for midnight UTC)
        #[arg(long)]
        quit_date: Option<String>,

        /// Cigarettes smoked per day before quitting
        #[arg(long)]
        cigarettes_per_day: Option<u32>,

        /// Price of one pack
        #[arg(long)]
        price_per_pack: Option<f64>,

        /// Cigarettes per pack
        #[arg(long)]
        cigarettes_per_pack: Option<u32>,
    },

    /// Switch subscription tier (free, free_account, pro)
    Tier { tier: SubscriptionTier },

    /// Restart the smoke-free clock at now (relapse)
    Reset,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => show(),
        ProfileAction::Set {
            quit_date,
            cigarettes_per_day,
            price_per_pack,
            cigarettes_per_pack,
        } => set(quit_date, cigarettes_per_day, price_per_pack, cigarettes_per_pack),
        ProfileAction::Tier { tier } => set_tier(tier),
        ProfileAction::Reset => reset(),
    }
}

fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = &config.profile;

    println!("Quit date: {}", profile.quit_at.to_rfc3339());
    println!("Cigarettes per day: {}", profile.cigarettes_per_day);
    println!(
        "Price per pack: {}{:.2}",
        config.display.currency_symbol, profile.price_per_pack
    );
    println!("Cigarettes per pack: {}", profile.cigarettes_per_pack);
    println!("Tier: {}", profile.tier.label());

    Ok(())
}

fn set(
    quit_date: Option<String>,
    cigarettes_per_day: Option<u32>,
    price_per_pack: Option<f64>,
    cigarettes_per_pack: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    if let Some(ref raw) = quit_date {
        config.profile.quit_at = parse_quit_date(raw)?;
    }
    if let Some(n) = cigarettes_per_day {
        config.profile.cigarettes_per_day = n;
    }
    if let Some(price) = price_per_pack {
        config.profile.price_per_pack = price;
    }
    if let Some(n) = cigarettes_per_pack {
        config.profile.cigarettes_per_pack = n;
    }

    // Reject before persisting; save re-validates too.
    config.profile.validate()?;
    config.save()?;

    println!("Profile updated.");
    Ok(())
}

fn set_tier(tier: SubscriptionTier) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    config.profile.tier = tier;
    config.save()?;
    println!("Tier set to {}.", tier.label());
    Ok(())
}

fn reset() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    config.profile.reset_quit_at(Utc::now());
    config.save()?;
    println!("Smoke-free clock restarted. You've got this.");
    Ok(())
}

fn parse_quit_date(raw: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("invalid date '{raw}'"))?;
        return Ok(midnight.and_utc());
    }
    Err(format!("cannot parse '{raw}' as RFC 3339 or YYYY-MM-DD").into())
}
