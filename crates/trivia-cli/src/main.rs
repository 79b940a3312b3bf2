//! trivia CLI — play a round of trivia in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "trivia",
    version,
    about = "Terminal trivia game backed by the Open Trivia Database"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a batch of questions and play (the default)
    Play {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of questions to fetch (1-50, default from config)
        #[arg(long)]
        amount: Option<u32>,
    },

    /// Create a starter trivia.toml
    Init,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Play {
        config: None,
        amount: None,
    }) {
        Commands::Play { config, amount } => commands::play::execute(config, amount).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
