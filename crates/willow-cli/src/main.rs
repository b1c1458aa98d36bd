use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "willow", version, about = "Willow CLI: guided breathing and daily affirmations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a guided breathing session
    Breathe(commands::breathe::BreatheArgs),
    /// List breathing patterns
    Patterns {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show today's quote
    Quote(commands::quote::QuoteArgs),
    /// Show the current time-of-day period
    Period,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Breathe(args) => commands::breathe::run(args),
        Commands::Patterns { json } => commands::patterns::run(json),
        Commands::Quote(args) => commands::quote::run(args),
        Commands::Period => commands::quote::run_period(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
