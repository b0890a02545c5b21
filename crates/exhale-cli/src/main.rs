use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "exhale-cli", version, about = "Exhale CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smoke-free progress at a glance
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Health milestone timeline
    Milestones {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Profile and settings management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Mood journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Feature access for the current tier
    Features,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { json } => commands::status::run(json),
        Commands::Milestones { json } => commands::milestones::run(json),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Features => commands::features::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
