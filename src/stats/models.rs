use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::lookup::{resolve_team, MemberDirectory};
use crate::record::{PlayerAggregate, PlayerMatchAggregate};

/// Per-player aggregates keyed by display name.
///
/// Iteration is in name order so that reports come out identical between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerTable {
    players: BTreeMap<String, PlayerAggregate>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerAggregate> {
        self.players.get(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlayerAggregate)> {
        self.players.iter()
    }

    pub fn team_of(&self, name: &str) -> Option<&str> {
        self.players.get(name).map(|player| player.team.as_str())
    }

    /// Appends one match summary under `name`, creating the player on first sight.
    pub fn record(&mut self, name: &str, summary: PlayerMatchAggregate) {
        self.players
            .entry(name.to_string())
            .or_default()
            .matches
            .push(summary);
    }

    /// Looks up every player's team once. Players missing from the roster get an empty team.
    pub fn assign_teams(&mut self, directory: &dyn MemberDirectory, player_count: usize) {
        for (name, player) in self.players.iter_mut() {
            player.team = resolve_team(directory, name, player_count);
            debug!(player = %name, team = %player.team, "Assigned team");
        }
    }
}
