use tracing::{debug, instrument, warn};

use crate::lookup::{resolve_display_name, MemberDirectory};
use crate::paifu::{Action, GameRecord, HuleEntry, NewRound, NoTile, RawPaifu, RecordHule};
use crate::record::{
    round_label, FanCount, Hand, Match, WinEvent, WinKind, NAGASHI_FAN_ID, SUPPORTED_PLAYER_COUNTS,
};

use super::lookback::{find_discarder, DISCARD_LOOKBACK};
use super::{ReplayError, ReplayWarning};

/// A replayed match together with the non-fatal findings of the replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub record: Match,
    pub warnings: Vec<ReplayWarning>,
}

/// Replays the action log of one match into a [`Match`].
pub fn reconstruct_match(
    log: &RawPaifu,
    player_count: usize,
    directory: &dyn MemberDirectory,
) -> Result<Match, ReplayError> {
    ReplayEngine::new(player_count, directory)?
        .reconstruct(log)
        .map(|reconstruction| reconstruction.record)
}

pub struct ReplayEngine<'a> {
    player_count: usize,
    directory: &'a dyn MemberDirectory,
}

impl<'a> ReplayEngine<'a> {
    pub fn new(player_count: usize, directory: &'a dyn MemberDirectory) -> Result<Self, ReplayError> {
        if !SUPPORTED_PLAYER_COUNTS.contains(&player_count) {
            return Err(ReplayError::UnsupportedPlayerCount(player_count));
        }
        Ok(Self {
            player_count,
            directory,
        })
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn reconstruct_str(&self, json: &str) -> Result<Reconstruction, ReplayError> {
        let log = RawPaifu::from_json_str(json)?;
        self.reconstruct(&log)
    }

    #[instrument(skip(self, log), fields(player_count = self.player_count))]
    pub fn reconstruct(&self, log: &RawPaifu) -> Result<Reconstruction, ReplayError> {
        let mut record = self.read_header(log)?;

        let actions = log
            .actions()
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Action::try_from(raw)
                    .map_err(|e| ReplayError::malformed(format!("action {index}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = ReplayState::new(self.player_count);
        let mut warnings = Vec::new();

        for (index, action) in actions.iter().enumerate() {
            let Action::Record(game_record) = action else {
                continue;
            };

            match game_record {
                GameRecord::NewRound(new_round) => state.start_hand(new_round)?,
                GameRecord::Hule(hule) => {
                    let hand = state.resolve_wins(hule, &actions[..index], index, &mut warnings)?;
                    record.hands.push(hand);
                }
                GameRecord::NoTile(no_tile) => {
                    let hand = state.resolve_draw(no_tile)?;
                    record.hands.push(hand);
                }
                GameRecord::DiscardTile(_) | GameRecord::Other(_) => {}
            }
        }

        debug!(
            uuid = %record.uuid,
            hands = record.hands.len(),
            warnings = warnings.len(),
            "Replayed match"
        );

        Ok(Reconstruction { record, warnings })
    }

    fn read_header(&self, log: &RawPaifu) -> Result<Match, ReplayError> {
        let head = &log.head;
        let uuid = head
            .uuid
            .clone()
            .ok_or_else(|| ReplayError::malformed("header has no uuid"))?;
        let players = head
            .result
            .as_ref()
            .and_then(|result| result.players.as_ref())
            .ok_or_else(|| ReplayError::malformed("header has no player results"))?;
        let accounts = head
            .accounts
            .as_ref()
            .ok_or_else(|| ReplayError::malformed("header has no accounts"))?;

        let mut record = Match::new(self.player_count, uuid);

        for player in players {
            let seat = self.checked_seat(player.seat, "player result")?;
            record.scores[seat] = player.total_point;
        }

        for account in accounts {
            let seat = self.checked_seat(account.seat.unwrap_or(0), "account")?;
            record.names[seat] = resolve_display_name(self.directory, &account.nickname);
        }

        debug!(uuid = %record.uuid, names = ?record.names, "Read log header");
        Ok(record)
    }

    fn checked_seat(&self, seat: usize, what: &str) -> Result<usize, ReplayError> {
        check_seat(seat, self.player_count, what)
    }
}

fn check_seat(seat: usize, player_count: usize, what: &str) -> Result<usize, ReplayError> {
    if seat < player_count {
        Ok(seat)
    } else {
        Err(ReplayError::malformed(format!(
            "{what} seat {seat} out of range for {player_count} players"
        )))
    }
}

/// Running state carried from one record to the next.
struct ReplayState {
    player_count: usize,
    dealer_seat: usize,
    scores_at_hand_start: Vec<i32>,
    current_hand: Option<Hand>,
    last_label: Option<String>,
}

impl ReplayState {
    fn new(player_count: usize) -> Self {
        Self {
            player_count,
            dealer_seat: 0,
            scores_at_hand_start: vec![0; player_count],
            current_hand: None,
            last_label: None,
        }
    }

    fn start_hand(&mut self, new_round: &NewRound) -> Result<(), ReplayError> {
        let label = round_label(new_round.chang, new_round.ju, new_round.ben).ok_or_else(|| {
            ReplayError::malformed(format!(
                "unknown round chang={} ju={}",
                new_round.chang, new_round.ju
            ))
        })?;

        if new_round.scores.len() != self.player_count {
            return Err(ReplayError::malformed(format!(
                "round {label:?} lists {} scores for {} players",
                new_round.scores.len(),
                self.player_count
            )));
        }

        self.dealer_seat = check_seat(new_round.ju as usize, self.player_count, "dealer")?;
        self.scores_at_hand_start = new_round.scores.clone();

        self.last_label = Some(label.clone());
        if let Some(unfinished) = self.current_hand.replace(Hand::new(self.player_count, label)) {
            warn!(round = %unfinished.round_label, "Hand started before previous hand ended");
        }
        Ok(())
    }

    /// Closes the open hand. A second end record without a new hand-start opens a
    /// fresh hand under the last label, still measured from the last hand-start snapshot.
    fn take_hand(&mut self, event: &str) -> Result<Hand, ReplayError> {
        if let Some(hand) = self.current_hand.take() {
            return Ok(hand);
        }

        let label = self
            .last_label
            .clone()
            .ok_or_else(|| ReplayError::malformed(format!("{event} before any hand started")))?;
        warn!(round = %label, event, "Hand ended again without a new hand start");
        Ok(Hand::new(self.player_count, label))
    }

    fn resolve_wins(
        &mut self,
        hule: &RecordHule,
        history: &[Action],
        action_index: usize,
        warnings: &mut Vec<ReplayWarning>,
    ) -> Result<Hand, ReplayError> {
        let mut hand = self.take_hand("win")?;

        for entry in &hule.hules {
            let winner = check_seat(entry.seat, self.player_count, "winner")?;

            if entry.zimo {
                self.apply_self_drawn(&mut hand, entry, winner);
                continue;
            }

            match find_discarder(history, DISCARD_LOOKBACK).filter(|&causer| causer != winner) {
                Some(causer) => {
                    let causer = check_seat(causer, self.player_count, "discard")?;
                    hand.wins.push(win_event(entry, winner, WinKind::Discard { causer }));
                    hand.main_deltas[winner] += entry.dadian;
                    hand.main_deltas[causer] -= entry.dadian;
                }
                None => {
                    warn!(
                        round = %hand.round_label,
                        action_index,
                        winner,
                        "Dropping ron without a resolvable discard"
                    );
                    warnings.push(ReplayWarning::UnresolvedCauser {
                        round: hand.round_label.clone(),
                        action_index,
                        winner,
                    });
                }
            }
        }

        self.reconcile(
            &mut hand,
            Some(hule.old_scores.as_slice()),
            Some(hule.delta_scores.as_slice()),
        );
        debug!(round = %hand.round_label, main = ?hand.main_deltas, sub = ?hand.sub_deltas, "Hand won");
        Ok(hand)
    }

    fn apply_self_drawn(&self, hand: &mut Hand, entry: &HuleEntry, winner: usize) {
        hand.wins.push(win_event(entry, winner, WinKind::SelfDrawn));

        for (seat, delta) in hand.main_deltas.iter_mut().enumerate() {
            if seat == winner {
                *delta += entry.dadian;
            } else if seat == self.dealer_seat {
                *delta -= entry.point_zimo_qin;
            } else {
                *delta -= entry.point_zimo_xian;
            }
        }
    }

    fn resolve_draw(&mut self, no_tile: &NoTile) -> Result<Hand, ReplayError> {
        let mut hand = self.take_hand("draw")?;

        if let Some(score) = no_tile.scores.as_ref().and_then(|scores| scores.first()) {
            self.reconcile(&mut hand, score.old_scores.as_deref(), score.delta_scores.as_deref());

            if let Some(seat) = score.seat {
                let seat = check_seat(seat, self.player_count, "nagashi")?;
                hand.wins.push(WinEvent {
                    seat,
                    is_nagashi: true,
                    kind: WinKind::SelfDrawn,
                    dadian: 0,
                    han: 0,
                    fu: 0,
                    fans: vec![FanCount::new(NAGASHI_FAN_ID, 0)],
                });
            }
        }

        debug!(round = %hand.round_label, sub = ?hand.sub_deltas, wins = hand.wins.len(), "Hand drawn");
        Ok(hand)
    }

    /// Sub-delta is whatever the log's snapshot moved that the main delta does not explain.
    /// Missing old scores fall back to the hand-start snapshot, missing deltas to zero.
    fn reconcile(&self, hand: &mut Hand, old_scores: Option<&[i32]>, delta_scores: Option<&[i32]>) {
        for seat in 0..self.player_count {
            let start = self.scores_at_hand_start[seat];
            let old = old_scores.and_then(|s| s.get(seat)).copied().unwrap_or(start);
            let delta = delta_scores.and_then(|s| s.get(seat)).copied().unwrap_or(0);
            hand.sub_deltas[seat] = (old - start) + delta - hand.main_deltas[seat];
        }
    }
}

fn win_event(entry: &HuleEntry, winner: usize, kind: WinKind) -> WinEvent {
    WinEvent {
        seat: winner,
        is_nagashi: false,
        kind,
        dadian: entry.dadian,
        han: entry.count,
        fu: entry.fu,
        fans: entry.fans.clone(),
    }
}
