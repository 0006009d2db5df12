//! Fluent builders for game logs in the platform's export format
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::{json, Value};

use paifu_ledger::RawPaifu;

// ============================================================================
// Win Entries
// ============================================================================

/// Self-drawn win entry of a `.lq.RecordHule` record.
pub fn tsumo(seat: usize, dadian: i32, dealer_pays: i32, others_pay: i32) -> Value {
    json!({
        "seat": seat,
        "zimo": true,
        "dadian": dadian,
        "count": 1,
        "fu": 30,
        "fans": [{"id": 1, "val": 1}],
        "point_zimo_qin": dealer_pays,
        "point_zimo_xian": others_pay
    })
}

/// Discard win entry of a `.lq.RecordHule` record. `zimo` is omitted as in the export.
pub fn ron(seat: usize, dadian: i32) -> Value {
    json!({
        "seat": seat,
        "dadian": dadian,
        "count": 2,
        "fu": 40,
        "fans": [{"id": 2, "val": 1}]
    })
}

// ============================================================================
// Log Builder
// ============================================================================

pub struct PaifuBuilder {
    player_count: usize,
    uuid: Option<String>,
    final_scores: Option<Vec<i32>>,
    accounts: Option<Vec<Value>>,
    actions: Vec<Value>,
}

impl PaifuBuilder {
    /// Log with `player{seat}` accounts and final scores at the origin point.
    pub fn new(player_count: usize) -> Self {
        let origin = if player_count == 3 { 35000 } else { 25000 };
        Self {
            player_count,
            uuid: Some(format!("{player_count}p-test-uuid")),
            final_scores: Some(vec![origin; player_count]),
            accounts: Some(
                (0..player_count)
                    .map(|seat| json!({"seat": seat, "nickname": format!("player{seat}")}))
                    .collect(),
            ),
            actions: Vec::new(),
        }
    }

    pub fn with_uuid(mut self, uuid: &str) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }

    pub fn without_uuid(mut self) -> Self {
        self.uuid = None;
        self
    }

    pub fn without_player_results(mut self) -> Self {
        self.final_scores = None;
        self
    }

    pub fn without_accounts(mut self) -> Self {
        self.accounts = None;
        self
    }

    pub fn with_final_scores(mut self, scores: &[i32]) -> Self {
        self.final_scores = Some(scores.to_vec());
        self
    }

    /// Replaces the account list with raw entries, e.g. to omit a `seat`.
    pub fn with_accounts(mut self, accounts: Vec<Value>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    fn record(mut self, name: &str, data: Value) -> Self {
        self.actions
            .push(json!({"type": 1, "result": {"name": name, "data": data}}));
        self
    }

    pub fn new_round(self, chang: u32, ju: u32, ben: u32, scores: &[i32]) -> Self {
        self.record(
            ".lq.RecordNewRound",
            json!({"chang": chang, "ju": ju, "ben": ben, "scores": scores}),
        )
    }

    pub fn deal(self, seat: usize) -> Self {
        self.record(".lq.RecordDealTile", json!({"seat": seat, "tile": "1z"}))
    }

    pub fn discard(self, seat: usize) -> Self {
        self.record(".lq.RecordDiscardTile", json!({"seat": seat, "tile": "9p"}))
    }

    /// Player input such as thinking time or a stamp.
    pub fn input(mut self) -> Self {
        self.actions
            .push(json!({"type": 2, "user_input": {"seat": 0, "type": 2}}));
        self
    }

    pub fn hule(self, hules: Vec<Value>, old_scores: &[i32], delta_scores: &[i32]) -> Self {
        self.record(
            ".lq.RecordHule",
            json!({"hules": hules, "old_scores": old_scores, "delta_scores": delta_scores}),
        )
    }

    pub fn no_tile(self, old_scores: &[i32], delta_scores: &[i32]) -> Self {
        self.record(
            ".lq.RecordNoTile",
            json!({"scores": [{"old_scores": old_scores, "delta_scores": delta_scores}]}),
        )
    }

    pub fn nagashi(self, seat: usize, old_scores: &[i32], delta_scores: &[i32]) -> Self {
        self.record(
            ".lq.RecordNoTile",
            json!({"scores": [{"seat": seat, "old_scores": old_scores, "delta_scores": delta_scores}]}),
        )
    }

    pub fn build_value(&self) -> Value {
        let mut head = serde_json::Map::new();
        if let Some(uuid) = &self.uuid {
            head.insert("uuid".into(), json!(uuid));
        }
        if let Some(scores) = &self.final_scores {
            let players: Vec<Value> = scores
                .iter()
                .enumerate()
                .map(|(seat, total)| json!({"seat": seat, "total_point": total}))
                .collect();
            head.insert("result".into(), json!({ "players": players }));
        }
        if let Some(accounts) = &self.accounts {
            head.insert("accounts".into(), json!(accounts));
        }

        json!({
            "head": head,
            "data": {"data": {"actions": self.actions}}
        })
    }

    pub fn build_json(&self) -> String {
        self.build_value().to_string()
    }

    pub fn build(&self) -> RawPaifu {
        serde_json::from_value(self.build_value()).expect("builder produces a valid log")
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }
}
