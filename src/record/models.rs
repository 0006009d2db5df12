use serde::Serialize;

use crate::lookup::FanCatalog;

use super::{FanClassifier, FanCount};

/// Who paid for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WinKind {
    /// Tsumo: every other seat paid.
    SelfDrawn,
    /// Ron: the seat that discarded the winning tile paid alone.
    Discard { causer: usize },
}

/// One scoring event within a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinEvent {
    pub seat: usize,
    pub is_nagashi: bool,
    pub kind: WinKind,
    pub dadian: i32,
    pub han: u32,
    pub fu: u32,
    pub fans: Vec<FanCount>,
}

impl WinEvent {
    pub fn causer(&self) -> Option<usize> {
        match self.kind {
            WinKind::SelfDrawn => None,
            WinKind::Discard { causer } => Some(causer),
        }
    }

    pub fn is_self_drawn(&self) -> bool {
        matches!(self.kind, WinKind::SelfDrawn)
    }

    /// Fan names sorted by id, bonus-tile fans suffixed with their count.
    pub fn fans_text(&self, catalog: &FanCatalog, classifier: &FanClassifier) -> String {
        let mut fans = self.fans.clone();
        fans.sort();
        fans.iter()
            .map(|fan| {
                let name = catalog.name(fan.id);
                if classifier.is_bonus(fan.id) {
                    format!("{name}{}", fan.count)
                } else {
                    name
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Text shown next to a hand, e.g. `Alice ツモ 2000\n立直,ドラ1`.
    pub fn describe(&self, names: &[String], catalog: &FanCatalog, classifier: &FanClassifier) -> String {
        let name = names.get(self.seat).map(String::as_str).unwrap_or_default();
        if self.is_nagashi {
            return format!("{name} 流し満貫 8000");
        }

        let how = if self.is_self_drawn() { "ツモ" } else { "ロン" };
        format!(
            "{name} {how} {}\n{}",
            self.dadian,
            self.fans_text(catalog, classifier)
        )
    }
}

/// One deal within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    pub round_label: String,
    /// Direct transfers from win resolution.
    pub main_deltas: Vec<i32>,
    /// Remaining movement reconciled against the log's own score snapshot.
    pub sub_deltas: Vec<i32>,
    pub wins: Vec<WinEvent>,
}

impl Hand {
    pub fn new(player_count: usize, round_label: String) -> Self {
        Self {
            round_label,
            main_deltas: vec![0; player_count],
            sub_deltas: vec![0; player_count],
            wins: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.main_deltas.len()
    }

    /// Points a seat gained or lost over this hand, `None` for a seat not at the table.
    pub fn net_delta(&self, seat: usize) -> Option<i32> {
        Some(self.main_deltas.get(seat)? + self.sub_deltas.get(seat)?)
    }

    /// Points that left the table into the pot (positive) or came back out of it.
    pub fn pot_delta(&self) -> i32 {
        -self.sub_deltas.iter().sum::<i32>()
    }

    /// Multi-line win text for the whole hand, empty for a plain draw.
    pub fn describe(&self, names: &[String], catalog: &FanCatalog, classifier: &FanClassifier) -> String {
        self.wins
            .iter()
            .map(|win| win.describe(names, catalog, classifier))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One complete game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub uuid: String,
    pub names: Vec<String>,
    pub scores: Vec<i32>,
    pub hands: Vec<Hand>,
}

impl Match {
    pub fn new(player_count: usize, uuid: String) -> Self {
        Self {
            uuid,
            names: vec![String::new(); player_count],
            scores: vec![0; player_count],
            hands: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    pub fn viewer_url(&self) -> String {
        format!("https://game.mahjongsoul.com/?paipu={}", self.uuid)
    }
}

/// One player's summary for one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerMatchAggregate {
    pub score: f64,
    pub max_gain: i32,
    pub pay_sum: i32,
    pub dora_count: u32,
    pub rare_fans: Vec<i32>,
}

impl PlayerMatchAggregate {
    pub fn new(final_points: i32) -> Self {
        Self {
            score: f64::from(final_points) / 1000.0,
            ..Self::default()
        }
    }

    pub fn reflect_fans(&mut self, fans: &[FanCount], classifier: &FanClassifier) {
        for fan in fans {
            if classifier.is_bonus(fan.id) {
                self.dora_count += fan.count;
            }
            if classifier.is_rare(fan.id) {
                self.rare_fans.push(fan.id);
            }
        }
    }
}

/// A player's team plus one summary per match played.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerAggregate {
    pub team: String,
    pub matches: Vec<PlayerMatchAggregate>,
}
