use chrono::Utc;
use exhale_core::progress::ProgressSnapshot;
use exhale_core::storage::Config;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let snapshot = ProgressSnapshot::at(Utc::now(), &config.profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let symbol = &config.display.currency_symbol;
    println!("Smoke-free: {}", snapshot.duration);
    println!("Streak: {} days", snapshot.streak_days);
    println!("Money saved: {}{:.2}", symbol, snapshot.money_saved);
    println!("Cigarettes avoided: {}", snapshot.cigarettes_avoided);
    println!("Life regained: {} hours", snapshot.life_regained_hours);

    if let Some(ref next) = snapshot.next_milestone {
        println!();
        println!(
            "Next milestone: {} (in {})",
            next.title,
            exhale_core::progress::format_duration(next.remaining_seconds)
        );
    } else {
        println!();
        println!("Every milestone reached. One year smoke-free!");
    }

    Ok(())
}
