use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::config::{origin_point, team_order};
use crate::lookup::FanCatalog;
use crate::record::{FanClassifier, Match};
use crate::stats::PlayerTable;

use super::{PlayerRow, ReportError, Reporter, ScoreSheet, TeamStandings};

#[derive(Debug, Serialize)]
struct ReportFile<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    player_count: usize,
    body: &'a T,
}

/// Writes each report as a pretty-printed JSON file under one directory.
pub struct JsonReporter {
    out_dir: PathBuf,
    player_count: usize,
    catalog: FanCatalog,
    classifier: FanClassifier,
}

impl JsonReporter {
    pub fn new(
        out_dir: impl Into<PathBuf>,
        player_count: usize,
        catalog: FanCatalog,
        classifier: FanClassifier,
    ) -> Self {
        Self {
            out_dir: out_dir.into(),
            player_count,
            catalog,
            classifier,
        }
    }

    pub fn match_path(&self, number: usize) -> PathBuf {
        self.out_dir
            .join(format!("{}p-match-{number:02}.json", self.player_count))
    }

    pub fn standings_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}p-standings.json", self.player_count))
    }

    pub fn players_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}p-players.json", self.player_count))
    }

    async fn write<T: Serialize + Sync>(&self, path: &Path, body: &T) -> Result<(), ReportError> {
        let file = ReportFile {
            generated_at: Utc::now(),
            player_count: self.player_count,
            body,
        };
        let json = serde_json::to_string_pretty(&file)?;

        let io_error = |source| ReportError::Io {
            path: path.display().to_string(),
            source,
        };
        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .map_err(io_error)?;
        tokio::fs::write(path, json).await.map_err(io_error)?;

        info!(path = %path.display(), "Wrote report");
        Ok(())
    }
}

#[async_trait]
impl Reporter for JsonReporter {
    #[instrument(skip(self, record), fields(uuid = %record.uuid))]
    async fn publish_match(&self, number: usize, record: &Match) -> Result<(), ReportError> {
        let sheet = ScoreSheet::build(
            record,
            origin_point(self.player_count),
            &self.catalog,
            &self.classifier,
        );
        self.write(&self.match_path(number), &sheet).await
    }

    async fn publish_standings(
        &self,
        matches: &[Match],
        table: &PlayerTable,
    ) -> Result<(), ReportError> {
        let standings = TeamStandings::build(matches, table, team_order(self.player_count));
        self.write(&self.standings_path(), &standings).await
    }

    async fn publish_players(&self, table: &PlayerTable) -> Result<(), ReportError> {
        let rows = PlayerRow::from_table(table, &self.catalog);
        self.write(&self.players_path(), &rows).await
    }
}
