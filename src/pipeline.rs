use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

use crate::lookup::MemberDirectory;
use crate::record::Match;
use crate::replay::{ReplayEngine, ReplayWarning};
use crate::shared::AppError;
use crate::stats::{Aggregator, PlayerTable};

/// A log file that could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLog {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything produced from one bracket's log directory.
#[derive(Debug, Default)]
pub struct BracketRun {
    pub matches: Vec<Match>,
    pub table: PlayerTable,
    pub warnings: Vec<ReplayWarning>,
    pub skipped: Vec<SkippedLog>,
}

/// `*.json` files directly under `dir`, sorted by path. A missing directory has no logs.
pub async fn list_logs(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let io_error = |source| AppError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(e)),
    };

    let mut logs = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}

/// Replays and folds every log of one bracket, in file-name order.
///
/// Logs that fail to replay are skipped and reported in [`BracketRun::skipped`];
/// teams are assigned once all matches are folded.
#[instrument(skip(dir, directory, aggregator), fields(dir = %dir.display()))]
pub async fn process_directory(
    dir: &Path,
    player_count: usize,
    directory: &dyn MemberDirectory,
    aggregator: &Aggregator,
) -> Result<BracketRun, AppError> {
    let engine = ReplayEngine::new(player_count, directory)?;
    let logs = list_logs(dir).await?;
    if logs.is_empty() {
        warn!("No log files found");
    }

    let mut run = BracketRun::default();
    for path in logs {
        info!(path = %path.display(), "Processing log");

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read log");
                run.skipped.push(SkippedLog {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match engine.reconstruct_str(&json) {
            Ok(reconstruction) => {
                for warning in &reconstruction.warnings {
                    warn!(path = %path.display(), %warning, "Replay warning");
                }
                aggregator.fold_match(&reconstruction.record, &mut run.table);
                run.warnings.extend(reconstruction.warnings);
                run.matches.push(reconstruction.record);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Skipping log");
                run.skipped.push(SkippedLog {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    run.table.assign_teams(directory, player_count);

    info!(
        matches = run.matches.len(),
        players = run.table.len(),
        skipped = run.skipped.len(),
        "Processed bracket"
    );
    Ok(run)
}
