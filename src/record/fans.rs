use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fan id recorded for a nagashi mangan, which the log does not score as a win.
pub const NAGASHI_FAN_ID: i32 = -1;

/// One scoring factor of a win and how many times it applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FanCount {
    pub id: i32,
    #[serde(rename = "val")]
    pub count: u32,
}

impl FanCount {
    pub fn new(id: i32, count: u32) -> Self {
        Self { id, count }
    }
}

/// Which fan ids count as bonus tiles (dora) and which are tracked as rare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanClassifier {
    bonus: BTreeSet<i32>,
    rare: BTreeSet<i32>,
}

impl FanClassifier {
    pub fn new(
        bonus: impl IntoIterator<Item = i32>,
        rare: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            bonus: bonus.into_iter().collect(),
            rare: rare.into_iter().collect(),
        }
    }

    pub fn is_bonus(&self, fan_id: i32) -> bool {
        self.bonus.contains(&fan_id)
    }

    pub fn is_rare(&self, fan_id: i32) -> bool {
        self.rare.contains(&fan_id)
    }
}
