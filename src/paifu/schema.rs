use serde::Deserialize;
use serde_json::Value;

/// Whole log file. Header sections are optional here so that missing ones can
/// be reported by the replay engine instead of failing inside serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaifu {
    #[serde(default)]
    pub head: RawHead,
    #[serde(default)]
    pub data: RawBody,
}

impl RawPaifu {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn actions(&self) -> &[RawAction] {
        &self.data.data.actions
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHead {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub result: Option<RawResult>,
    #[serde(default)]
    pub accounts: Option<Vec<RawAccount>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub players: Option<Vec<RawPlayerResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerResult {
    #[serde(default)]
    pub seat: usize,
    #[serde(default)]
    pub total_point: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAccount {
    /// Absent in one generation of the export; treated as seat 0.
    #[serde(default)]
    pub seat: Option<usize>,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBody {
    #[serde(default)]
    pub data: RawActionList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawActionList {
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type", default)]
    pub category: u32,
    #[serde(default)]
    pub result: Option<RawRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub name: String,
    #[serde(default)]
    pub data: Value,
}
