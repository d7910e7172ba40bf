//! Driver binary: builds the five AVEMO decks into `presentations/`.

use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = Path::new("presentations");
    let reports = match deckforge::deck::build_all(out_dir) {
        Ok(reports) => reports,
        Err(err) => {
            tracing::error!(error = %err, dir = %out_dir.display(), "could not prepare output directory");
            return ExitCode::FAILURE;
        },
    };

    let failed = reports.iter().filter(|report| report.result.is_err()).count();
    if failed > 0 {
        tracing::error!(failed, total = reports.len(), "deck generation finished with failures");
        ExitCode::FAILURE
    } else {
        tracing::info!(total = reports.len(), "all decks written");
        ExitCode::SUCCESS
    }
}
