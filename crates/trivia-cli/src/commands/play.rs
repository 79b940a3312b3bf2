//! The `trivia play` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use trivia_core::build_question_queue;
use trivia_core::quiz::Quiz;
use trivia_core::traits::QuestionSource;
use trivia_providers::{create_source, load_config_from};

/// Largest batch the Open Trivia Database serves in one request.
const MAX_AMOUNT: u32 = 50;

const FETCH_FAILED: &str = "Request received error. Exiting program...";

pub async fn execute(config_path: Option<PathBuf>, amount: Option<u32>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let amount = amount.unwrap_or(config.amount);
    anyhow::ensure!(
        (1..=MAX_AMOUNT).contains(&amount),
        "amount must be between 1 and {MAX_AMOUNT}"
    );

    println!("trivia v{}", env!("CARGO_PKG_VERSION"));

    let source = create_source(&config);
    play(source.as_ref(), amount).await
}

/// Fetch once, then run the whole quiz over stdin/stdout and print the score.
///
/// A failed fetch ends the run before any question is shown.
async fn play(source: &dyn QuestionSource, amount: u32) -> Result<()> {
    let records = match source.fetch(amount).await {
        Ok(records) => records,
        Err(e) => {
            println!("{FETCH_FAILED}");
            return Err(e.context(format!("failed to fetch questions from {}", source.name())));
        }
    };

    let queue = build_question_queue(&records).context("failed to decode questions")?;
    info!(source = source.name(), questions = queue.len(), "starting quiz");

    let board = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Quiz::new(stdin.lock(), stdout.lock(), rand::thread_rng()).run(queue)
    })
    .await
    .context("quiz task failed")??;

    println!("{board}");
    Ok(())
}
