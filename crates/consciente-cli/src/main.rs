use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "consciente", version, about = "Transformación Consciente: diario, alarmas y coach")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in, sign out and session status
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Record a journal entry
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// List journal entries, newest first
    History,
    /// Summary counts, tiredness trend and category distribution
    Dashboard {
        /// Skip the coach's weekly summary
        #[arg(long)]
        no_insight: bool,
    },
    /// Reminder alarms
    Alarms {
        #[command(subcommand)]
        action: commands::alarms::AlarmsAction,
    },
    /// Profile details and custom categories
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let json = cli.json;
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action, json),
        Commands::Entry { action } => commands::entry::run(action, json),
        Commands::History => commands::history::run(json),
        Commands::Dashboard { no_insight } => commands::dashboard::run(!no_insight, json),
        Commands::Alarms { action } => commands::alarms::run(action, json),
        Commands::Profile { action } => commands::profile::run(action, json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
