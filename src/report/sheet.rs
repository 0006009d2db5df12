use serde::Serialize;

use crate::lookup::FanCatalog;
use crate::record::{FanClassifier, Match};

/// One hand of a match sheet: the standings going in and what moved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandRow {
    pub round_label: String,
    pub scores_before: Vec<i32>,
    pub pot_before: i32,
    pub main_deltas: Vec<i32>,
    pub sub_deltas: Vec<i32>,
    pub pot_delta: i32,
    pub win_text: String,
}

/// Hand-by-hand score progression of one match.
///
/// Seats start at the origin point and the pot at zero; every hand adds its
/// main and sub deltas, and the pot absorbs whatever the seats lost in sub deltas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub uuid: String,
    pub viewer_url: String,
    pub names: Vec<String>,
    pub rows: Vec<HandRow>,
    pub final_scores: Vec<i32>,
    pub final_pot: i32,
    /// Reported totals divided by 1000.
    pub final_points: Vec<f64>,
}

impl ScoreSheet {
    pub fn build(
        record: &Match,
        origin_point: i32,
        catalog: &FanCatalog,
        classifier: &FanClassifier,
    ) -> Self {
        let mut scores = vec![origin_point; record.player_count()];
        let mut pot = 0;
        let mut rows = Vec::with_capacity(record.hands.len());

        for hand in &record.hands {
            let pot_delta = hand.pot_delta();
            rows.push(HandRow {
                round_label: hand.round_label.clone(),
                scores_before: scores.clone(),
                pot_before: pot,
                main_deltas: hand.main_deltas.clone(),
                sub_deltas: hand.sub_deltas.clone(),
                pot_delta,
                win_text: hand.describe(&record.names, catalog, classifier),
            });

            for (seat, score) in scores.iter_mut().enumerate() {
                *score += hand.net_delta(seat).unwrap_or(0);
            }
            pot += pot_delta;
        }

        Self {
            uuid: record.uuid.clone(),
            viewer_url: record.viewer_url(),
            names: record.names.clone(),
            rows,
            final_scores: scores,
            final_pot: pot,
            final_points: record
                .scores
                .iter()
                .map(|&points| f64::from(points) / 1000.0)
                .collect(),
        }
    }

    /// Seat totals plus pot; constant across the sheet when every hand conserves points.
    pub fn table_total(&self) -> i32 {
        self.final_scores.iter().sum::<i32>() + self.final_pot
    }
}
