use anyhow::Result;

use number_guesser::{config::AppConfig, logging::setup_logging, ui::run_ui};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _guard = setup_logging(&config.log_dir)?;

    tracing::info!(
        "Starting number guesser (difficulty: {}, scores: {})",
        config.difficulty,
        config.scores_path.display()
    );

    let result = run_ui(&config);
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }
    result
}
