use exhale_core::access::{can_access, Feature};
use exhale_core::storage::Config;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let tier = config.profile.tier;

    println!("Tier: {}", tier.label());
    println!();

    for feature in Feature::ALL {
        let marker = if can_access(tier, *feature) {
            "available"
        } else {
            "locked"
        };
        println!("  {:<20} {}", feature.label(), marker);
    }

    Ok(())
}
