use serde::Serialize;
use tracing::warn;

use crate::lookup::FanCatalog;
use crate::record::Match;
use crate::stats::PlayerTable;

/// Normalized match scores arranged by team, one row per match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStandings {
    pub teams: Vec<String>,
    pub rows: Vec<Vec<Option<f64>>>,
    pub totals: Vec<f64>,
}

impl TeamStandings {
    /// Players whose team is not in `teams` are left out of the table.
    pub fn build(matches: &[Match], table: &PlayerTable, teams: &[&str]) -> Self {
        let mut rows = Vec::with_capacity(matches.len());
        let mut totals = vec![0.0; teams.len()];

        for record in matches {
            let mut row = vec![None; teams.len()];
            for (name, &points) in record.names.iter().zip(&record.scores) {
                let team = table.team_of(name).unwrap_or_default();
                let Some(column) = teams.iter().position(|t| *t == team) else {
                    warn!(uuid = %record.uuid, player = %name, team = %team, "Player has no standings column");
                    continue;
                };

                let score = f64::from(points) / 1000.0;
                row[column] = Some(score);
                totals[column] += score;
            }
            rows.push(row);
        }

        Self {
            teams: teams.iter().map(|t| t.to_string()).collect(),
            rows,
            totals,
        }
    }
}

/// One line of the player report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    pub name: String,
    pub team: String,
    pub score: f64,
    pub max_gain: i32,
    pub pay_sum: i32,
    pub dora_count: u32,
    pub rare_fans: String,
}

impl PlayerRow {
    /// One row per player and match, players in table order.
    pub fn from_table(table: &PlayerTable, catalog: &FanCatalog) -> Vec<Self> {
        table
            .iter()
            .flat_map(|(name, player)| {
                player.matches.iter().map(move |summary| PlayerRow {
                    name: name.clone(),
                    team: player.team.clone(),
                    score: summary.score,
                    max_gain: summary.max_gain,
                    pay_sum: summary.pay_sum,
                    dora_count: summary.dora_count,
                    rare_fans: summary
                        .rare_fans
                        .iter()
                        .map(|&id| catalog.name(id))
                        .collect::<Vec<_>>()
                        .join(","),
                })
            })
            .collect()
    }
}
