use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use super::{LookupError, MemberDirectory};

/// One entry of the tournament member file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub team4: Option<String>,
    #[serde(default)]
    pub team3: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MemberFile {
    members: Vec<Member>,
}

/// Member roster loaded from `members.json`.
///
/// Handles map to display names through `game_name`; teams are looked up by
/// display name, separately for the 3-seat and 4-seat brackets.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    by_handle: BTreeMap<String, usize>,
    by_name: BTreeMap<String, usize>,
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        let mut by_handle = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for (index, member) in members.iter().enumerate() {
            if !member.game_name.is_empty() {
                by_handle.insert(member.game_name.clone(), index);
            }
            // first entry wins, matching a top-down scan of the file
            by_name.entry(member.name.clone()).or_insert(index);
        }

        Self {
            by_handle,
            by_name,
            members,
        }
    }

    pub fn from_json_str(json: &str, path: &str) -> Result<Self, LookupError> {
        let file: MemberFile = serde_json::from_str(json).map_err(|source| LookupError::Parse {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::new(file.members))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let path_text = path.display().to_string();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LookupError::Io {
                path: path_text.clone(),
                source,
            })?;

        let roster = Self::from_json_str(&json, &path_text)?;
        info!(path = %path_text, members = roster.len(), "Loaded member roster");
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberDirectory for Roster {
    fn display_name(&self, handle: &str) -> Option<String> {
        let name = self
            .by_handle
            .get(handle)
            .map(|&index| self.members[index].name.clone());

        debug!(handle = %handle, name = ?name, "Handle to display name lookup");
        name
    }

    fn team(&self, player_name: &str, player_count: usize) -> Option<String> {
        let member = &self.members[*self.by_name.get(player_name)?];
        match player_count {
            3 => member.team3.clone(),
            4 => member.team4.clone(),
            _ => None,
        }
    }
}
