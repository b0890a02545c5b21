use chrono::Utc;
use exhale_core::milestones::milestone_status;
use exhale_core::progress::elapsed_seconds;
use exhale_core::storage::Config;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let elapsed = elapsed_seconds(Utc::now(), config.profile.quit_at);
    let statuses = milestone_status(elapsed);

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    println!("Health Milestones");
    println!();
    for status in statuses {
        let marker = if status.completed { "[x]" } else { "[ ]" };
        println!("  {} {}", marker, status.milestone.title);
        println!("      {}", status.milestone.description);
    }

    Ok(())
}
