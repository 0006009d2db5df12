use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use strum_macros::EnumString;

use crate::record::FanCount;

use super::RawAction;

/// `type` value of actions carrying a game record; everything else is player input.
pub const GAME_RECORD_CATEGORY: u32 = 1;

/// Record names the replay understands.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum RecordKind {
    #[strum(serialize = ".lq.RecordNewRound")]
    NewRound,
    #[strum(serialize = ".lq.RecordHule")]
    Hule,
    #[strum(serialize = ".lq.RecordNoTile")]
    NoTile,
    #[strum(serialize = ".lq.RecordDiscardTile")]
    DiscardTile,
    #[strum(default)]
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewRound {
    #[serde(default)]
    pub chang: u32,
    #[serde(default)]
    pub ju: u32,
    #[serde(default)]
    pub ben: u32,
    #[serde(default)]
    pub scores: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HuleEntry {
    #[serde(default)]
    pub seat: usize,
    #[serde(default)]
    pub zimo: bool,
    #[serde(default)]
    pub dadian: i32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub fu: u32,
    #[serde(default)]
    pub fans: Vec<FanCount>,
    #[serde(default)]
    pub point_zimo_qin: i32,
    #[serde(default)]
    pub point_zimo_xian: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordHule {
    #[serde(default)]
    pub hules: Vec<HuleEntry>,
    #[serde(default)]
    pub old_scores: Vec<i32>,
    #[serde(default)]
    pub delta_scores: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoTileScore {
    /// Present only when a player achieved nagashi mangan.
    #[serde(default)]
    pub seat: Option<usize>,
    #[serde(default)]
    pub old_scores: Option<Vec<i32>>,
    #[serde(default)]
    pub delta_scores: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoTile {
    #[serde(default)]
    pub scores: Option<Vec<NoTileScore>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiscardTile {
    #[serde(default)]
    pub seat: usize,
}

/// A game record with its payload decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameRecord {
    NewRound(NewRound),
    Hule(RecordHule),
    NoTile(NoTile),
    DiscardTile(DiscardTile),
    Other(String),
}

/// One entry of the action list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Record(GameRecord),
    /// Thinking time, stamps and other player input.
    Input,
}

impl Action {
    pub fn discard_seat(&self) -> Option<usize> {
        match self {
            Action::Record(GameRecord::DiscardTile(discard)) => Some(discard.seat),
            _ => None,
        }
    }
}

impl TryFrom<&RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: &RawAction) -> Result<Self, Self::Error> {
        let record = match (&raw.result, raw.category) {
            (Some(record), GAME_RECORD_CATEGORY) => record,
            _ => return Ok(Action::Input),
        };

        // EnumString with a default variant cannot fail
        let kind = RecordKind::from_str(&record.name)
            .unwrap_or_else(|_| RecordKind::Other(record.name.clone()));
        let data = match &record.data {
            Value::Null => Value::Object(Default::default()),
            data => data.clone(),
        };

        let decoded = match kind {
            RecordKind::NewRound => GameRecord::NewRound(serde_json::from_value(data)?),
            RecordKind::Hule => GameRecord::Hule(serde_json::from_value(data)?),
            RecordKind::NoTile => GameRecord::NoTile(serde_json::from_value(data)?),
            RecordKind::DiscardTile => GameRecord::DiscardTile(serde_json::from_value(data)?),
            RecordKind::Other(name) => GameRecord::Other(name),
        };

        Ok(Action::Record(decoded))
    }
}
